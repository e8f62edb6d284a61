use crate::{
    abstract_trait::order::repository::OrderQueryRepositoryTrait,
    domain::requests::order::FindAllOrders, model::order::Order as OrderModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Debug, FromRow)]
struct OrderRowWithCount {
    #[sqlx(flatten)]
    order: OrderModel,
    total_count: i64,
}

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<(Vec<OrderModel>, i64), RepositoryError> {
        info!("📦 Fetching orders | Page: {}", req.page);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.page_size.max(1) as i64;
        let offset = ((req.page - 1).max(0) as i64) * limit;

        let rows = sqlx::query_as::<_, OrderRowWithCount>(
            r#"
            SELECT
                order_id,
                product_id,
                email,
                status,
                created_at,
                processed_at,
                COUNT(*) OVER() AS total_count
            FROM orders
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let orders = rows.into_iter().map(|r| r.order).collect();

        Ok((orders, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        info!("🆔 Fetching order by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, product_id, email, status, created_at, processed_at
            FROM orders
            WHERE order_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
