use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Product line a plan belongs to. Serialised in snake_case (`"discord_bot"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    Minecraft,
    Vps,
    DiscordBot,
    WebHosting,
}

impl PlanType {
    pub const ALL: [PlanType; 4] = [
        PlanType::Minecraft,
        PlanType::Vps,
        PlanType::DiscordBot,
        PlanType::WebHosting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Minecraft => "minecraft",
            PlanType::Vps => "vps",
            PlanType::DiscordBot => "discord_bot",
            PlanType::WebHosting => "web_hosting",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "minecraft" => Some(PlanType::Minecraft),
            "vps" => Some(PlanType::Vps),
            "discord_bot" => Some(PlanType::DiscordBot),
            "web_hosting" => Some(PlanType::WebHosting),
            _ => None,
        }
    }
}

impl Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for plan_type in PlanType::ALL {
            assert_eq!(PlanType::from_str(plan_type.as_str()), Some(plan_type));
        }
        assert_eq!(PlanType::from_str("VPS"), None);
        assert_eq!(PlanType::from_str("dedicated"), None);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&PlanType::DiscordBot).unwrap();
        assert_eq!(json, "\"discord_bot\"");

        let parsed: PlanType = serde_json::from_str("\"web_hosting\"").unwrap();
        assert_eq!(parsed, PlanType::WebHosting);
    }
}
