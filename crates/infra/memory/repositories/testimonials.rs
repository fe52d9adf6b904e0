use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    entities::testimonials::{InsertTestimonialEntity, TestimonialEntity},
    repositories::testimonials::TestimonialRepository,
};
use crate::infra::memory::memory_store::MemoryStore;

pub struct TestimonialMemory {
    store: Arc<MemoryStore>,
}

impl TestimonialMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialMemory {
    async fn create(
        &self,
        insert_testimonial_entity: InsertTestimonialEntity,
    ) -> Result<TestimonialEntity> {
        let testimonial = insert_testimonial_entity.into_entity(Uuid::new_v4(), Utc::now());
        self.store
            .testimonials
            .write()
            .insert(testimonial.id, testimonial.clone());

        Ok(testimonial)
    }

    async fn find_all(&self) -> Result<Vec<TestimonialEntity>> {
        Ok(self.store.testimonials.read().values())
    }

    async fn find_by_id(&self, testimonial_id: Uuid) -> Result<Option<TestimonialEntity>> {
        Ok(self.store.testimonials.read().get(&testimonial_id).cloned())
    }
}
