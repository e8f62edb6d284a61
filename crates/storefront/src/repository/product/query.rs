use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::product::FindAllProducts, model::product::Product as ProductModel,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Debug, FromRow)]
struct ProductRowWithCount {
    #[sqlx(flatten)]
    product: ProductModel,
    total_count: i64,
}

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

fn page_bounds(req: &FindAllProducts) -> (i64, i64) {
    let limit = req.page_size.max(1) as i64;
    let offset = ((req.page - 1).max(0) as i64) * limit;
    (limit, offset)
}

fn search_pattern(req: &FindAllProducts) -> Option<&str> {
    if req.search.trim().is_empty() {
        None
    } else {
        Some(req.search.as_str())
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_catalog(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!("🛍️ Fetching catalog products with search: {:?}", req.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (limit, offset) = page_bounds(req);

        let rows = sqlx::query_as::<_, ProductRowWithCount>(
            r#"
            SELECT
                product_id,
                title,
                description,
                price_cents,
                inventory,
                images,
                is_active,
                created_at,
                updated_at,
                deleted_at,
                COUNT(*) OVER() AS total_count
            FROM products
            WHERE deleted_at IS NULL
              AND inventory > 0
              AND ($1::TEXT IS NULL OR title ILIKE '%' || $1 || '%')
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern(req))
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch catalog products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let products = rows.into_iter().map(|r| r.product).collect();

        Ok((products, total))
    }

    async fn find_active(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!("🟢 Fetching active products with search: {:?}", req.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (limit, offset) = page_bounds(req);

        let rows = sqlx::query_as::<_, ProductRowWithCount>(
            r#"
            SELECT
                product_id,
                title,
                description,
                price_cents,
                inventory,
                images,
                is_active,
                created_at,
                updated_at,
                deleted_at,
                COUNT(*) OVER() AS total_count
            FROM products
            WHERE deleted_at IS NULL
              AND ($1::TEXT IS NULL OR title ILIKE '%' || $1 || '%')
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern(req))
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch active products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let products = rows.into_iter().map(|r| r.product).collect();

        Ok((products, total))
    }

    async fn find_archived(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!("🗑️ Fetching archived products with search: {:?}", req.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (limit, offset) = page_bounds(req);

        let rows = sqlx::query_as::<_, ProductRowWithCount>(
            r#"
            SELECT
                product_id,
                title,
                description,
                price_cents,
                inventory,
                images,
                is_active,
                created_at,
                updated_at,
                deleted_at,
                COUNT(*) OVER() AS total_count
            FROM products
            WHERE deleted_at IS NOT NULL
              AND ($1::TEXT IS NULL OR title ILIKE '%' || $1 || '%')
            ORDER BY deleted_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern(req))
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch archived products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let products = rows.into_iter().map(|r| r.product).collect();

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                product_id,
                title,
                description,
                price_cents,
                inventory,
                images,
                is_active,
                created_at,
                updated_at,
                deleted_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_purge_eligible(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("⏳ Fetching products archived at or before {cutoff}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                product_id,
                title,
                description,
                price_cents,
                inventory,
                images,
                is_active,
                created_at,
                updated_at,
                deleted_at
            FROM products
            WHERE deleted_at IS NOT NULL
              AND deleted_at <= $1
            ORDER BY deleted_at ASC
            "#,
        )
        .bind(cutoff)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch purge-eligible products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }
}
