use crate::{
    abstract_trait::order::repository::OrderCommandRepositoryTrait,
    domain::requests::order::CreateOrderRequest, model::order::Order as OrderModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // product_id is a plain reference; the schema enforces no foreign key.
        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (product_id, email, status, created_at)
            VALUES ($1, $2, 'new', current_timestamp)
            RETURNING order_id, product_id, email, status, created_at, processed_at
            "#,
        )
        .bind(req.product_id)
        .bind(&req.email)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for product {}: {:?}",
                req.product_id, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order ID {} for product {}",
            order.order_id, order.product_id
        );
        Ok(order)
    }

    async fn mark_processed(&self, id: i32) -> Result<OrderModel, RepositoryError> {
        info!("✔️ Marking order processed: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // No current-status guard: a second call simply re-stamps processed_at.
        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE orders
            SET status       = 'processed',
                processed_at = current_timestamp
            WHERE order_id = $1
            RETURNING order_id, product_id, email, status, created_at, processed_at
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to mark order {id} processed: {:?}", e);
            RepositoryError::from(e)
        })?;

        order.ok_or(RepositoryError::NotFound)
    }
}
