use crate::{domain::requests::product::FindAllProducts, model::product::Product as ProductModel};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Storefront view: active products with inventory, newest first.
    async fn find_catalog(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;
    async fn find_active(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;
    async fn find_archived(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;
    /// Archived products whose `deleted_at` stamp is at or before `cutoff`.
    async fn find_purge_eligible(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ProductModel>, RepositoryError>;
}
