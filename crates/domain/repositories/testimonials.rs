use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::testimonials::{InsertTestimonialEntity, TestimonialEntity};

#[automock]
#[async_trait]
pub trait TestimonialRepository {
    async fn create(
        &self,
        insert_testimonial_entity: InsertTestimonialEntity,
    ) -> Result<TestimonialEntity>;
    async fn find_all(&self) -> Result<Vec<TestimonialEntity>>;
    async fn find_by_id(&self, testimonial_id: Uuid) -> Result<Option<TestimonialEntity>>;
}
