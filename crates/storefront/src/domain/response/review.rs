use crate::model::review::Review as ReviewModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ReviewResponse {
    pub id: i32,
    pub name: String,
    pub rating: i32,
    pub text: String,
    pub approved: bool,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

impl From<ReviewModel> for ReviewResponse {
    fn from(value: ReviewModel) -> Self {
        ReviewResponse {
            id: value.review_id,
            name: value.name,
            rating: value.rating,
            text: value.text,
            approved: value.approved,
            created_at: value.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
