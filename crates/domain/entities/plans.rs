use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::enums::plan_types::PlanType;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub period: String,
    pub plan_type: PlanType,
    pub features: Vec<String>,
    pub is_popular: bool,
    pub is_coming_soon: bool,
    pub created_at: DateTime<Utc>,
}

/// Everything the caller supplies for a new plan; `id` and `created_at` are stamped by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertPlanEntity {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub period: String,
    pub plan_type: PlanType,
    pub features: Vec<String>,
    pub is_popular: bool,
    pub is_coming_soon: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePlanEntity {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub period: Option<String>,
    pub plan_type: Option<PlanType>,
    pub features: Option<Vec<String>>,
    pub is_popular: Option<bool>,
    pub is_coming_soon: Option<bool>,
}

impl InsertPlanEntity {
    pub fn into_entity(self, id: Uuid, created_at: DateTime<Utc>) -> PlanEntity {
        PlanEntity {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            currency: self.currency,
            period: self.period,
            plan_type: self.plan_type,
            features: self.features,
            is_popular: self.is_popular,
            is_coming_soon: self.is_coming_soon,
            created_at,
        }
    }
}

impl PlanEntity {
    /// Merges a change set over the record. `id` and `created_at` are never touched.
    pub fn apply(&mut self, changes: UpdatePlanEntity) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(currency) = changes.currency {
            self.currency = currency;
        }
        if let Some(period) = changes.period {
            self.period = period;
        }
        if let Some(plan_type) = changes.plan_type {
            self.plan_type = plan_type;
        }
        if let Some(features) = changes.features {
            self.features = features;
        }
        if let Some(is_popular) = changes.is_popular {
            self.is_popular = is_popular;
        }
        if let Some(is_coming_soon) = changes.is_coming_soon {
            self.is_coming_soon = is_coming_soon;
        }
    }
}
