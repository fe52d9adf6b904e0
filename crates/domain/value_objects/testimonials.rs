use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::testimonials::TestimonialEntity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDto {
    pub id: Uuid,
    pub quote: String,
    pub author_name: String,
    pub author_position: String,
    pub author_company: String,
    pub author_image: Option<String>,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl From<TestimonialEntity> for TestimonialDto {
    fn from(value: TestimonialEntity) -> Self {
        Self {
            id: value.id,
            quote: value.quote,
            author_name: value.author_name,
            author_position: value.author_position,
            author_company: value.author_company,
            author_image: value.author_image,
            rating: value.rating,
            created_at: value.created_at,
        }
    }
}
