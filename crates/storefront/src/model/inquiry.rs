use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Inquiry {
    pub inquiry_id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
}
