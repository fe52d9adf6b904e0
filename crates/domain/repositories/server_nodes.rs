use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::server_nodes::{InsertServerNodeEntity, ServerNodeEntity};

#[automock]
#[async_trait]
pub trait ServerNodeRepository {
    async fn create(
        &self,
        insert_server_node_entity: InsertServerNodeEntity,
    ) -> Result<ServerNodeEntity>;
    /// Stored values only; live-looking metrics are simulated further up.
    async fn find_all(&self) -> Result<Vec<ServerNodeEntity>>;
    async fn find_by_id(&self, server_node_id: Uuid) -> Result<Option<ServerNodeEntity>>;
}
