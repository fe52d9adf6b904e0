use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerNodeEntity {
    pub id: Uuid,
    pub name: String,
    pub is_operational: bool,
    pub cpu_load: i32,
    pub memory_usage: i32,
    pub network_usage: i32,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertServerNodeEntity {
    pub name: String,
    pub is_operational: bool,
    pub cpu_load: i32,
    pub memory_usage: i32,
    pub network_usage: i32,
}

impl InsertServerNodeEntity {
    pub fn into_entity(self, id: Uuid, last_updated: DateTime<Utc>) -> ServerNodeEntity {
        ServerNodeEntity {
            id,
            name: self.name,
            is_operational: self.is_operational,
            cpu_load: self.cpu_load,
            memory_usage: self.memory_usage,
            network_usage: self.network_usage,
            last_updated,
        }
    }
}
