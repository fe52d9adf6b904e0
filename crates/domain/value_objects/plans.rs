use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::plans::{InsertPlanEntity, PlanEntity, UpdatePlanEntity};
use crate::domain::value_objects::enums::plan_types::PlanType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub period: String,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub features: Vec<String>,
    pub is_popular: bool,
    pub is_coming_soon: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PlanEntity> for PlanDto {
    fn from(value: PlanEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            currency: value.currency,
            period: value.period,
            plan_type: value.plan_type,
            features: value.features,
            is_popular: value.is_popular,
            is_coming_soon: value.is_coming_soon,
            created_at: value.created_at,
        }
    }
}

/// Request body for `POST /api/plans`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertPlanModel {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub period: String,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: Option<bool>,
    #[serde(default)]
    pub is_coming_soon: Option<bool>,
}

impl InsertPlanModel {
    pub fn to_entity(self) -> InsertPlanEntity {
        InsertPlanEntity {
            name: self.name,
            description: self.description,
            price: self.price,
            currency: self.currency,
            period: self.period,
            plan_type: self.plan_type,
            features: self.features,
            is_popular: self.is_popular.unwrap_or(false),
            is_coming_soon: self.is_coming_soon.unwrap_or(false),
        }
    }
}

/// Request body for `PUT /api/plans/:id`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanModel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default, rename = "type")]
    pub plan_type: Option<PlanType>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub is_popular: Option<bool>,
    #[serde(default)]
    pub is_coming_soon: Option<bool>,
}

impl UpdatePlanModel {
    pub fn to_entity(self) -> UpdatePlanEntity {
        UpdatePlanEntity {
            name: self.name,
            description: self.description,
            price: self.price,
            currency: self.currency,
            period: self.period,
            plan_type: self.plan_type,
            features: self.features,
            is_popular: self.is_popular,
            is_coming_soon: self.is_coming_soon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_model_defaults_optional_flags_to_false() {
        let model: InsertPlanModel = serde_json::from_value(json!({
            "name": "Tiny VPS",
            "description": "1 core",
            "price": 199,
            "currency": "₹",
            "period": "mo",
            "type": "vps",
            "features": ["1 vCPU"]
        }))
        .unwrap();

        let entity = model.to_entity();
        assert_eq!(entity.plan_type, PlanType::Vps);
        assert!(!entity.is_popular);
        assert!(!entity.is_coming_soon);
        assert_eq!(entity.price, 199.0);
    }

    #[test]
    fn update_model_ignores_id_and_created_at() {
        let model: UpdatePlanModel = serde_json::from_value(json!({
            "id": "not-touchable",
            "createdAt": "2020-01-01T00:00:00Z",
            "isPopular": true
        }))
        .unwrap();

        assert_eq!(
            model.to_entity(),
            UpdatePlanEntity {
                is_popular: Some(true),
                ..Default::default()
            }
        );
    }
}
