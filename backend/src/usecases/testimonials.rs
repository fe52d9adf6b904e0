use anyhow::Result;
use sriyan_core::domain::{
    repositories::testimonials::TestimonialRepository,
    value_objects::testimonials::TestimonialDto,
};
use std::sync::Arc;
use tracing::{error, info};

pub struct TestimonialUseCase<T>
where
    T: TestimonialRepository + Send + Sync + 'static,
{
    testimonial_repo: Arc<T>,
}

impl<T> TestimonialUseCase<T>
where
    T: TestimonialRepository + Send + Sync + 'static,
{
    pub fn new(testimonial_repo: Arc<T>) -> Self {
        Self { testimonial_repo }
    }

    pub async fn list_testimonials(&self) -> Result<Vec<TestimonialDto>> {
        let testimonials = self.testimonial_repo.find_all().await.map_err(|err| {
            error!(db_error = ?err, "testimonials: failed to list testimonials");
            err
        })?;

        info!(
            testimonial_count = testimonials.len(),
            "testimonials: testimonials loaded"
        );
        Ok(testimonials.into_iter().map(TestimonialDto::from).collect())
    }
}
