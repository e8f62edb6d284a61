use crate::{
    abstract_trait::inquiry::InquiryRepositoryTrait,
    domain::requests::inquiry::CreateInquiryRequest, model::inquiry::Inquiry as InquiryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct InquiryRepository {
    db: ConnectionPool,
}

impl InquiryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InquiryRepositoryTrait for InquiryRepository {
    async fn create_inquiry(
        &self,
        req: &CreateInquiryRequest,
    ) -> Result<InquiryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let inquiry = sqlx::query_as::<_, InquiryModel>(
            r#"
            INSERT INTO inquiries (name, email, message, created_at)
            VALUES ($1, $2, $3, current_timestamp)
            RETURNING inquiry_id, name, email, message, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.message)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create inquiry from '{}': {:?}", req.email, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created inquiry ID {}", inquiry.inquiry_id);
        Ok(inquiry)
    }
}
