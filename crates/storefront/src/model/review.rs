use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub review_id: i32,
    pub name: String,
    pub rating: i32,
    pub text: String,
    pub approved: bool,
    pub created_at: Option<DateTime<Utc>>,
}
