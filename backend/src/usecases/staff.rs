use std::sync::Arc;

use axum::http::StatusCode;
use sriyan_core::domain::{
    repositories::staff::StaffRepository,
    value_objects::staff::{InsertStaffModel, StaffMemberDto, UpdateStaffModel},
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StaffError {
    #[error("Staff member not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl StaffError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StaffError::NotFound => StatusCode::NOT_FOUND,
            StaffError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, StaffError>;

/// Staff roster management. The staff-of-the-month hand-over is delegated to the
/// repository so the previous holder is cleared in the same write as the new one is set.
pub struct StaffUseCase<S>
where
    S: StaffRepository + Send + Sync + 'static,
{
    staff_repo: Arc<S>,
}

impl<S> StaffUseCase<S>
where
    S: StaffRepository + Send + Sync + 'static,
{
    pub fn new(staff_repo: Arc<S>) -> Self {
        Self { staff_repo }
    }

    pub async fn list_staff(&self) -> UseCaseResult<Vec<StaffMemberDto>> {
        let staff = self.staff_repo.find_all().await.map_err(|err| {
            error!(db_error = ?err, "staff: failed to list staff");
            StaffError::Internal(err)
        })?;

        info!(staff_count = staff.len(), "staff: staff loaded");
        Ok(staff.into_iter().map(StaffMemberDto::from).collect())
    }

    pub async fn get_staff_member(&self, staff_id: Uuid) -> UseCaseResult<StaffMemberDto> {
        let member = self
            .staff_repo
            .find_by_id(staff_id)
            .await
            .map_err(|err| {
                error!(%staff_id, db_error = ?err, "staff: failed to load staff member");
                StaffError::Internal(err)
            })?
            .ok_or(StaffError::NotFound)?;

        Ok(member.into())
    }

    pub async fn create_staff_member(
        &self,
        insert_staff_model: InsertStaffModel,
    ) -> UseCaseResult<StaffMemberDto> {
        let member = self
            .staff_repo
            .create(insert_staff_model.to_entity())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "staff: failed to create staff member");
                StaffError::Internal(err)
            })?;

        if member.is_staff_of_month {
            info!(staff_id = %member.id, "staff: new staff member is staff of the month");
        }
        info!(staff_id = %member.id, "staff: staff member created");
        Ok(member.into())
    }

    pub async fn update_staff_member(
        &self,
        staff_id: Uuid,
        update_staff_model: UpdateStaffModel,
    ) -> UseCaseResult<StaffMemberDto> {
        let promoting = update_staff_model.is_staff_of_month == Some(true);

        let member = self
            .staff_repo
            .update(staff_id, update_staff_model.to_entity())
            .await
            .map_err(|err| {
                error!(%staff_id, db_error = ?err, "staff: failed to update staff member");
                StaffError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%staff_id, "staff: update target not found");
                StaffError::NotFound
            })?;

        if promoting {
            info!(%staff_id, "staff: staff of the month handed over");
        }
        info!(%staff_id, "staff: staff member updated");
        Ok(member.into())
    }

    pub async fn delete_staff_member(&self, staff_id: Uuid) -> UseCaseResult<()> {
        let removed = self.staff_repo.delete(staff_id).await.map_err(|err| {
            error!(%staff_id, db_error = ?err, "staff: failed to delete staff member");
            StaffError::Internal(err)
        })?;

        if !removed {
            warn!(%staff_id, "staff: delete target not found");
            return Err(StaffError::NotFound);
        }

        info!(%staff_id, "staff: staff member deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sriyan_core::domain::{
        entities::staff::{InsertStaffEntity, StaffEntity},
        repositories::staff::MockStaffRepository,
    };

    fn sample_member(is_staff_of_month: bool) -> StaffEntity {
        StaffEntity {
            id: Uuid::new_v4(),
            name: "Div".to_string(),
            position: "System Administrator".to_string(),
            bio: "Managing and maintaining system infrastructure.".to_string(),
            avatar: None,
            skills: vec!["DevOps".to_string()],
            is_staff_of_month,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_defaults_the_staff_of_month_flag_to_false() {
        let mut staff_repo = MockStaffRepository::new();
        staff_repo
            .expect_create()
            .withf(|insert: &InsertStaffEntity| !insert.is_staff_of_month)
            .times(1)
            .returning(|insert| Ok(insert.into_entity(Uuid::new_v4(), Utc::now())));

        let usecase = StaffUseCase::new(Arc::new(staff_repo));
        let created = usecase
            .create_staff_member(InsertStaffModel {
                name: "Ace".to_string(),
                position: "Co Founder".to_string(),
                bio: "Operations.".to_string(),
                avatar: None,
                skills: vec!["Operations".to_string()],
                is_staff_of_month: None,
            })
            .await
            .unwrap();

        assert!(!created.is_staff_of_month);
    }

    #[tokio::test]
    async fn update_forwards_the_promotion_to_the_repository() {
        let mut staff_repo = MockStaffRepository::new();
        let member = sample_member(true);
        let staff_id = member.id;

        staff_repo
            .expect_update()
            .withf(move |id, changes| *id == staff_id && changes.is_staff_of_month == Some(true))
            .times(1)
            .returning(move |_, _| Ok(Some(member.clone())));

        let usecase = StaffUseCase::new(Arc::new(staff_repo));
        let updated = usecase
            .update_staff_member(
                staff_id,
                UpdateStaffModel {
                    is_staff_of_month: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.is_staff_of_month);
    }

    #[tokio::test]
    async fn update_of_missing_member_is_not_found() {
        let mut staff_repo = MockStaffRepository::new();
        staff_repo.expect_update().returning(|_, _| Ok(None));

        let usecase = StaffUseCase::new(Arc::new(staff_repo));
        let err = usecase
            .update_staff_member(Uuid::new_v4(), UpdateStaffModel::default())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_reports_not_found() {
        let mut staff_repo = MockStaffRepository::new();
        staff_repo.expect_delete().returning(|_| Ok(false));

        let usecase = StaffUseCase::new(Arc::new(staff_repo));

        assert!(matches!(
            usecase.delete_staff_member(Uuid::new_v4()).await,
            Err(StaffError::NotFound)
        ));
    }
}
