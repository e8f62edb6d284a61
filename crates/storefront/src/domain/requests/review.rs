use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ana")]
    pub name: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    #[schema(example = 5)]
    pub rating: i32,

    #[validate(length(min = 1, message = "Review text is required"))]
    pub text: String,
}
