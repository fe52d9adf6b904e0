use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use sriyan_core::{
    domain::{
        repositories::testimonials::TestimonialRepository,
        value_objects::testimonials::TestimonialDto,
    },
    infra::memory::{memory_store::MemoryStore, repositories::testimonials::TestimonialMemory},
};

use crate::{
    axum_http::{api_response::ApiResponse, error_responses::AppError},
    usecases::testimonials::TestimonialUseCase,
};

pub fn routes(store: Arc<MemoryStore>) -> Router {
    let testimonial_repository = TestimonialMemory::new(store);
    let testimonial_usecase = TestimonialUseCase::new(Arc::new(testimonial_repository));

    Router::new()
        .route("/", get(list_testimonials::<TestimonialMemory>))
        .with_state(Arc::new(testimonial_usecase))
}

pub async fn list_testimonials<T>(
    State(testimonial_usecase): State<Arc<TestimonialUseCase<T>>>,
) -> Result<ApiResponse<Vec<TestimonialDto>>, AppError>
where
    T: TestimonialRepository + Send + Sync + 'static,
{
    let testimonials = testimonial_usecase
        .list_testimonials()
        .await
        .map_err(|_| AppError::Internal("Failed to fetch testimonials".to_string()))?;

    Ok(ApiResponse::ok(testimonials))
}
