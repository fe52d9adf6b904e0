use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    entities::server_nodes::{InsertServerNodeEntity, ServerNodeEntity},
    repositories::server_nodes::ServerNodeRepository,
};
use crate::infra::memory::memory_store::MemoryStore;

pub struct ServerNodeMemory {
    store: Arc<MemoryStore>,
}

impl ServerNodeMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ServerNodeRepository for ServerNodeMemory {
    async fn create(
        &self,
        insert_server_node_entity: InsertServerNodeEntity,
    ) -> Result<ServerNodeEntity> {
        let node = insert_server_node_entity.into_entity(Uuid::new_v4(), Utc::now());
        self.store.server_nodes.write().insert(node.id, node.clone());

        Ok(node)
    }

    async fn find_all(&self) -> Result<Vec<ServerNodeEntity>> {
        Ok(self.store.server_nodes.read().values())
    }

    async fn find_by_id(&self, server_node_id: Uuid) -> Result<Option<ServerNodeEntity>> {
        Ok(self.store.server_nodes.read().get(&server_node_id).cloned())
    }
}
