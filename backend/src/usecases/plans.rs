use std::sync::Arc;

use axum::http::StatusCode;
use sriyan_core::domain::{
    repositories::plans::PlanRepository,
    value_objects::{
        enums::plan_types::PlanType,
        plans::{InsertPlanModel, PlanDto, UpdatePlanModel},
    },
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Plan not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PlanError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PlanError::NotFound => StatusCode::NOT_FOUND,
            PlanError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, PlanError>;

pub struct PlanUseCase<P>
where
    P: PlanRepository + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
}

impl<P> PlanUseCase<P>
where
    P: PlanRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>) -> Self {
        Self { plan_repo }
    }

    /// Lists every plan, or only those of `plan_type` when given. An empty filter is no filter;
    /// an unknown type matches nothing.
    pub async fn list_plans(&self, plan_type: Option<&str>) -> UseCaseResult<Vec<PlanDto>> {
        let plans = match plan_type.filter(|raw| !raw.is_empty()) {
            None => self.plan_repo.find_all().await,
            Some(raw) => match PlanType::from_str(raw) {
                Some(plan_type) => self.plan_repo.find_by_type(plan_type).await,
                None => {
                    warn!(plan_type = raw, "plans: unknown plan type filter");
                    return Ok(Vec::new());
                }
            },
        }
        .map_err(|err| {
            error!(db_error = ?err, "plans: failed to list plans");
            PlanError::Internal(err)
        })?;

        info!(plan_count = plans.len(), "plans: plans loaded");
        Ok(plans.into_iter().map(PlanDto::from).collect())
    }

    pub async fn get_plan(&self, plan_id: Uuid) -> UseCaseResult<PlanDto> {
        let plan = self
            .plan_repo
            .find_by_id(plan_id)
            .await
            .map_err(|err| {
                error!(%plan_id, db_error = ?err, "plans: failed to load plan");
                PlanError::Internal(err)
            })?
            .ok_or(PlanError::NotFound)?;

        Ok(plan.into())
    }

    pub async fn create_plan(&self, insert_plan_model: InsertPlanModel) -> UseCaseResult<PlanDto> {
        let plan = self
            .plan_repo
            .create(insert_plan_model.to_entity())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "plans: failed to create plan");
                PlanError::Internal(err)
            })?;

        info!(plan_id = %plan.id, plan_type = %plan.plan_type, "plans: plan created");
        Ok(plan.into())
    }

    pub async fn update_plan(
        &self,
        plan_id: Uuid,
        update_plan_model: UpdatePlanModel,
    ) -> UseCaseResult<PlanDto> {
        let plan = self
            .plan_repo
            .update(plan_id, update_plan_model.to_entity())
            .await
            .map_err(|err| {
                error!(%plan_id, db_error = ?err, "plans: failed to update plan");
                PlanError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%plan_id, "plans: update target not found");
                PlanError::NotFound
            })?;

        info!(%plan_id, "plans: plan updated");
        Ok(plan.into())
    }

    pub async fn delete_plan(&self, plan_id: Uuid) -> UseCaseResult<()> {
        let removed = self.plan_repo.delete(plan_id).await.map_err(|err| {
            error!(%plan_id, db_error = ?err, "plans: failed to delete plan");
            PlanError::Internal(err)
        })?;

        if !removed {
            warn!(%plan_id, "plans: delete target not found");
            return Err(PlanError::NotFound);
        }

        info!(%plan_id, "plans: plan deleted");
        Ok(())
    }
}
