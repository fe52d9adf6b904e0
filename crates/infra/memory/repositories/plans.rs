use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    entities::plans::{InsertPlanEntity, PlanEntity, UpdatePlanEntity},
    repositories::plans::PlanRepository,
    value_objects::enums::plan_types::PlanType,
};
use crate::infra::memory::memory_store::MemoryStore;

pub struct PlanMemory {
    store: Arc<MemoryStore>,
}

impl PlanMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PlanRepository for PlanMemory {
    async fn create(&self, insert_plan_entity: InsertPlanEntity) -> Result<PlanEntity> {
        let plan = insert_plan_entity.into_entity(Uuid::new_v4(), Utc::now());
        self.store.plans.write().insert(plan.id, plan.clone());

        Ok(plan)
    }

    async fn find_all(&self) -> Result<Vec<PlanEntity>> {
        Ok(self.store.plans.read().values())
    }

    async fn find_by_type(&self, plan_type: PlanType) -> Result<Vec<PlanEntity>> {
        let plans = self
            .store
            .plans
            .read()
            .values()
            .into_iter()
            .filter(|plan| plan.plan_type == plan_type)
            .collect();

        Ok(plans)
    }

    async fn find_by_id(&self, plan_id: Uuid) -> Result<Option<PlanEntity>> {
        Ok(self.store.plans.read().get(&plan_id).cloned())
    }

    async fn update(
        &self,
        plan_id: Uuid,
        update_plan_entity: UpdatePlanEntity,
    ) -> Result<Option<PlanEntity>> {
        let mut plans = self.store.plans.write();

        let updated = plans.get_mut(&plan_id).map(|plan| {
            plan.apply(update_plan_entity);
            plan.clone()
        });

        Ok(updated)
    }

    async fn delete(&self, plan_id: Uuid) -> Result<bool> {
        Ok(self.store.plans.write().remove(&plan_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_plan(name: &str, plan_type: PlanType) -> InsertPlanEntity {
        InsertPlanEntity {
            name: name.to_string(),
            description: format!("{name} description"),
            price: 499.0,
            currency: "₹".to_string(),
            period: "mo".to_string(),
            plan_type,
            features: vec!["2GB RAM".to_string(), "DDoS Protection".to_string()],
            is_popular: false,
            is_coming_soon: false,
        }
    }

    #[tokio::test]
    async fn created_plan_reads_back_with_the_same_fields() {
        let repo = PlanMemory::new(Arc::new(MemoryStore::new()));
        let input = insert_plan("Basic VPS", PlanType::Vps);

        let created = repo.create(input.clone()).await.unwrap();
        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, input.name);
        assert_eq!(fetched.description, input.description);
        assert_eq!(fetched.price, input.price);
        assert_eq!(fetched.currency, input.currency);
        assert_eq!(fetched.period, input.period);
        assert_eq!(fetched.plan_type, input.plan_type);
        assert_eq!(fetched.features, input.features);
        assert_eq!(fetched.is_popular, input.is_popular);
        assert_eq!(fetched.is_coming_soon, input.is_coming_soon);
    }

    #[tokio::test]
    async fn every_create_gets_a_fresh_id() {
        let repo = PlanMemory::new(Arc::new(MemoryStore::new()));

        let first = repo.create(insert_plan("A", PlanType::Vps)).await.unwrap();
        let second = repo.create(insert_plan("A", PlanType::Vps)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_by_type_matches_filtered_find_all() {
        let repo = PlanMemory::new(Arc::new(MemoryStore::new()));
        for (n, plan_type) in PlanType::ALL.iter().cycle().take(11).enumerate() {
            repo.create(insert_plan(&format!("plan-{n}"), *plan_type))
                .await
                .unwrap();
        }

        let all = repo.find_all().await.unwrap();
        for plan_type in PlanType::ALL {
            let expected: Vec<PlanEntity> = all
                .iter()
                .filter(|plan| plan.plan_type == plan_type)
                .cloned()
                .collect();
            assert_eq!(repo.find_by_type(plan_type).await.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn update_merges_fields_and_keeps_identity() {
        let repo = PlanMemory::new(Arc::new(MemoryStore::new()));
        let created = repo
            .create(insert_plan("Standard VPS", PlanType::Vps))
            .await
            .unwrap();

        let updated = repo
            .update(
                created.id,
                UpdatePlanEntity {
                    price: Some(899.0),
                    is_popular: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.price, 899.0);
        assert!(updated.is_popular);
        assert_eq!(updated.name, created.name);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_of_missing_plan_is_none() {
        let repo = PlanMemory::new(Arc::new(MemoryStore::new()));

        let result = repo
            .update(Uuid::new_v4(), UpdatePlanEntity::default())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_reports_presence() {
        let repo = PlanMemory::new(Arc::new(MemoryStore::new()));
        let created = repo
            .create(insert_plan("Pro Minecraft", PlanType::Minecraft))
            .await
            .unwrap();

        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
