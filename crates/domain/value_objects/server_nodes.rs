use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::server_nodes::ServerNodeEntity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerNodeDto {
    pub id: Uuid,
    pub name: String,
    pub is_operational: bool,
    pub cpu_load: i32,
    pub memory_usage: i32,
    pub network_usage: i32,
    pub last_updated: DateTime<Utc>,
}

impl From<ServerNodeEntity> for ServerNodeDto {
    fn from(value: ServerNodeEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            is_operational: value.is_operational,
            cpu_load: value.cpu_load,
            memory_usage: value.memory_usage,
            network_usage: value.network_usage,
            last_updated: value.last_updated,
        }
    }
}
