use crate::{
    domain::requests::product::{CreateProductRecordRequest, UpdateProductRecordRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRecordRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        req: &UpdateProductRecordRequest,
    ) -> Result<ProductModel, RepositoryError>;
    /// Stamps `deleted_at` and drops the active flag. Re-archiving an already
    /// archived product re-stamps the clock.
    async fn archive_product(&self, id: i32) -> Result<ProductModel, RepositoryError>;
    async fn restore_product(&self, id: i32) -> Result<ProductModel, RepositoryError>;
    /// Removes an archived row permanently.
    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError>;
}
