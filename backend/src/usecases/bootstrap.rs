use anyhow::{Context, Result};
use sriyan_core::{
    domain::{
        entities::users::InsertUserEntity,
        repositories::{
            plans::PlanRepository, server_nodes::ServerNodeRepository, staff::StaffRepository,
            testimonials::TestimonialRepository, users::UserRepository,
        },
        value_objects::enums::user_roles::UserRole,
    },
    infra::security::password,
};
use std::sync::Arc;
use tracing::{info, warn};

use super::seed_catalog;
use crate::config::config_model::AdminAccount;

const DEFAULT_ADMIN_PASSWORD: &str = "password";

/// Populates an empty store. Everything goes through the repositories' `create`.
pub struct BootstrapUseCase<P, S, T, N, U>
where
    P: PlanRepository + Send + Sync + 'static,
    S: StaffRepository + Send + Sync + 'static,
    T: TestimonialRepository + Send + Sync + 'static,
    N: ServerNodeRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
    staff_repo: Arc<S>,
    testimonial_repo: Arc<T>,
    server_node_repo: Arc<N>,
    user_repo: Arc<U>,
}

impl<P, S, T, N, U> BootstrapUseCase<P, S, T, N, U>
where
    P: PlanRepository + Send + Sync + 'static,
    S: StaffRepository + Send + Sync + 'static,
    T: TestimonialRepository + Send + Sync + 'static,
    N: ServerNodeRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(
        plan_repo: Arc<P>,
        staff_repo: Arc<S>,
        testimonial_repo: Arc<T>,
        server_node_repo: Arc<N>,
        user_repo: Arc<U>,
    ) -> Self {
        Self {
            plan_repo,
            staff_repo,
            testimonial_repo,
            server_node_repo,
            user_repo,
        }
    }

    /// Seeds plans, staff, testimonials and server nodes unless any plan exists.
    /// Returns whether anything was written.
    pub async fn seed_catalog(&self) -> Result<bool> {
        let existing = self
            .plan_repo
            .find_all()
            .await
            .context("bootstrap: failed to check existing plans")?;
        if !existing.is_empty() {
            info!(
                plan_count = existing.len(),
                "bootstrap: catalog already present, skipping seed"
            );
            return Ok(false);
        }

        for plan in seed_catalog::plans() {
            self.plan_repo.create(plan).await?;
        }
        for member in seed_catalog::staff() {
            self.staff_repo.create(member).await?;
        }
        for testimonial in seed_catalog::testimonials() {
            self.testimonial_repo.create(testimonial).await?;
        }
        for node in seed_catalog::server_nodes() {
            self.server_node_repo.create(node).await?;
        }

        info!("bootstrap: initial data generated");
        Ok(true)
    }

    /// Creates the configured admin account if its username is free.
    pub async fn ensure_admin(&self, admin: &AdminAccount) -> Result<bool> {
        if self
            .user_repo
            .find_by_username(&admin.username)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        if admin.password == DEFAULT_ADMIN_PASSWORD {
            warn!(
                username = %admin.username,
                "bootstrap: admin account uses the default password, set ADMIN_PASSWORD"
            );
        }

        let plain = admin.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&plain))
            .await
            .context("bootstrap: password hashing task failed")??;

        let user = self
            .user_repo
            .create(InsertUserEntity {
                username: admin.username.clone(),
                password_hash,
                role: UserRole::Admin,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "bootstrap: admin account created");
        Ok(true)
    }
}
