use crate::{
    domain::{requests::inquiry::CreateInquiryRequest, response::api::ApiResponse},
    model::inquiry::Inquiry as InquiryModel,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynInquiryRepository = Arc<dyn InquiryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait InquiryRepositoryTrait {
    async fn create_inquiry(
        &self,
        req: &CreateInquiryRequest,
    ) -> Result<InquiryModel, RepositoryError>;
}

pub type DynInquiryService = Arc<dyn InquiryServiceTrait + Send + Sync>;

#[async_trait]
pub trait InquiryServiceTrait {
    async fn create_inquiry(
        &self,
        req: &CreateInquiryRequest,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
