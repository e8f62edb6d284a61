use crate::{
    domain::{
        requests::review::CreateReviewRequest,
        response::{api::ApiResponse, review::ReviewResponse},
    },
    model::review::Review as ReviewModel,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynReviewRepository = Arc<dyn ReviewRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ReviewRepositoryTrait {
    async fn create_review(
        &self,
        req: &CreateReviewRequest,
        approved: bool,
    ) -> Result<ReviewModel, RepositoryError>;
    async fn find_approved(&self, limit: i64) -> Result<Vec<ReviewModel>, RepositoryError>;
}

pub type DynReviewService = Arc<dyn ReviewServiceTrait + Send + Sync>;

#[async_trait]
pub trait ReviewServiceTrait {
    async fn create_review(
        &self,
        req: &CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError>;
    async fn find_approved(
        &self,
        limit: Option<i64>,
    ) -> Result<ApiResponse<Vec<ReviewResponse>>, ServiceError>;
}
