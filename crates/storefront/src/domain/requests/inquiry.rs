use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateInquiryRequest {
    #[serde(default)]
    pub name: String,

    #[validate(email(message = "A valid email is required"))]
    #[schema(example = "visitor@example.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}
