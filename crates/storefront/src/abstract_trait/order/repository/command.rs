use crate::{domain::requests::order::CreateOrderRequest, model::order::Order as OrderModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError>;
    /// Re-stamps `processed_at` even when the order is already processed.
    async fn mark_processed(&self, id: i32) -> Result<OrderModel, RepositoryError>;
}
