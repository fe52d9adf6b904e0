pub mod auth;
pub mod axum_http;
pub mod config;
pub mod usecases;

use std::sync::Arc;

use anyhow::Result;
use sriyan_core::infra::memory::{
    memory_store::MemoryStore,
    repositories::{
        plans::PlanMemory, server_nodes::ServerNodeMemory, staff::StaffMemory,
        testimonials::TestimonialMemory, users::UserMemory,
    },
};
use tracing::info;

use config::config_model::DotEnvyConfig;
use usecases::bootstrap::BootstrapUseCase;

/// Builds the store every request handler shares, seeded with the catalog and the admin account.
pub async fn prepare_store(config: &DotEnvyConfig) -> Result<Arc<MemoryStore>> {
    let store = Arc::new(MemoryStore::new());

    let bootstrap = BootstrapUseCase::new(
        Arc::new(PlanMemory::new(Arc::clone(&store))),
        Arc::new(StaffMemory::new(Arc::clone(&store))),
        Arc::new(TestimonialMemory::new(Arc::clone(&store))),
        Arc::new(ServerNodeMemory::new(Arc::clone(&store))),
        Arc::new(UserMemory::new(Arc::clone(&store))),
    );

    let seeded = bootstrap.seed_catalog().await?;
    let admin_created = bootstrap.ensure_admin(&config.admin).await?;
    info!(seeded, admin_created, "bootstrap: store ready");

    Ok(store)
}
