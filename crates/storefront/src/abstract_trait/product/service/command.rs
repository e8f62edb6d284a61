use crate::domain::{
    requests::product::{ImageUpload, SaveProductRequest},
    response::{
        api::ApiResponse,
        product::{ArchivedProductResponse, ProductResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    /// Create or update a product, optionally preparing and uploading a new
    /// image first. Validation happens before any repository or storage call.
    async fn save_product(
        &self,
        req: &SaveProductRequest,
        image: Option<&ImageUpload>,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn archive_product(
        &self,
        id: i32,
    ) -> Result<ApiResponse<ArchivedProductResponse>, ServiceError>;
    async fn restore_product(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    /// Admin-confirmed permanent deletion. Does not enforce the retention age.
    async fn purge_product(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
    /// Scheduled path: purge every archived product past the retention age.
    /// Returns the number of purged records.
    async fn sweep_expired(&self) -> Result<u64, ServiceError>;
}
