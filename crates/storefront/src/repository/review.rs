use crate::{
    abstract_trait::review::ReviewRepositoryTrait, domain::requests::review::CreateReviewRequest,
    model::review::Review as ReviewModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ReviewRepository {
    db: ConnectionPool,
}

impl ReviewRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepositoryTrait for ReviewRepository {
    async fn create_review(
        &self,
        req: &CreateReviewRequest,
        approved: bool,
    ) -> Result<ReviewModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let review = sqlx::query_as::<_, ReviewModel>(
            r#"
            INSERT INTO reviews (name, rating, text, approved, created_at)
            VALUES ($1, $2, $3, $4, current_timestamp)
            RETURNING review_id, name, rating, text, approved, created_at
            "#,
        )
        .bind(&req.name)
        .bind(req.rating)
        .bind(&req.text)
        .bind(approved)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create review from '{}': {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created review ID {}", review.review_id);
        Ok(review)
    }

    async fn find_approved(&self, limit: i64) -> Result<Vec<ReviewModel>, RepositoryError> {
        info!("⭐ Fetching up to {limit} approved reviews");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let reviews = sqlx::query_as::<_, ReviewModel>(
            r#"
            SELECT review_id, name, rating, text, approved, created_at
            FROM reviews
            WHERE approved = TRUE
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch approved reviews: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(reviews)
    }
}
