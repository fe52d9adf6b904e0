use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_plans: usize,
    pub total_staff: usize,
    pub total_servers: usize,
    pub uptime: String,
}
