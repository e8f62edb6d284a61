use crate::abstract_trait::admin::AdminQueryRepositoryTrait;
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

pub struct AdminQueryRepository {
    db: ConnectionPool,
}

impl AdminQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminQueryRepositoryTrait for AdminQueryRepository {
    async fn is_admin(&self, uid: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM admins WHERE uid = $1)
            "#,
        )
        .bind(uid)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to check admin membership for '{uid}': {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(exists)
    }
}
