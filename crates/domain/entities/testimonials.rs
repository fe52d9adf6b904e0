use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialEntity {
    pub id: Uuid,
    pub quote: String,
    pub author_name: String,
    pub author_position: String,
    pub author_company: String,
    pub author_image: Option<String>,
    /// Expected 1-5; not enforced here.
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertTestimonialEntity {
    pub quote: String,
    pub author_name: String,
    pub author_position: String,
    pub author_company: String,
    pub author_image: Option<String>,
    pub rating: i32,
}

impl InsertTestimonialEntity {
    pub fn into_entity(self, id: Uuid, created_at: DateTime<Utc>) -> TestimonialEntity {
        TestimonialEntity {
            id,
            quote: self.quote,
            author_name: self.author_name,
            author_position: self.author_position,
            author_company: self.author_company,
            author_image: self.author_image,
            rating: self.rating,
            created_at,
        }
    }
}
