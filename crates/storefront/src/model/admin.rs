use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Membership row for the admin gate. The `uid` is the identity provider's
/// stable subject and is provisioned out of band.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    pub uid: String,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
