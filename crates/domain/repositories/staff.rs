use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::staff::{InsertStaffEntity, StaffEntity, UpdateStaffEntity};

/// Implementations keep at most one staff member flagged as staff of the month:
/// `create` and `update` clear every other holder in the same critical section
/// that writes a flagged record.
#[automock]
#[async_trait]
pub trait StaffRepository {
    async fn create(&self, insert_staff_entity: InsertStaffEntity) -> Result<StaffEntity>;
    async fn find_all(&self) -> Result<Vec<StaffEntity>>;
    async fn find_by_id(&self, staff_id: Uuid) -> Result<Option<StaffEntity>>;
    async fn update(
        &self,
        staff_id: Uuid,
        update_staff_entity: UpdateStaffEntity,
    ) -> Result<Option<StaffEntity>>;
    async fn delete(&self, staff_id: Uuid) -> Result<bool>;
}
