use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRecordRequest, UpdateProductRecordRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRecordRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (title, description, price_cents, inventory, images, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, TRUE, current_timestamp, current_timestamp)
            RETURNING product_id, title, description, price_cents, inventory, images, is_active, created_at, updated_at, deleted_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.price_cents)
        .bind(req.inventory)
        .bind(&req.images)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product '{}': {:?}", req.title, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created product '{}' (ID: {})",
            product.title, product.product_id
        );
        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRecordRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // is_active and deleted_at always move together: an explicit
        // activation override also clears or stamps the archive marker.
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET title       = $2,
                description = $3,
                price_cents = $4,
                inventory   = $5,
                images      = COALESCE($6, images),
                is_active   = COALESCE($7, is_active),
                deleted_at  = CASE
                                WHEN $7 IS TRUE THEN NULL
                                WHEN $7 IS FALSE THEN COALESCE(deleted_at, current_timestamp)
                                ELSE deleted_at
                              END,
                updated_at  = current_timestamp
            WHERE product_id = $1
            RETURNING product_id, title, description, price_cents, inventory, images, is_active, created_at, updated_at, deleted_at
            "#,
        )
        .bind(req.product_id)
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.price_cents)
        .bind(req.inventory)
        .bind(req.images.as_deref())
        .bind(req.is_active)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", req.product_id, err);
            RepositoryError::from(err)
        })?;

        let product = product.ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", product.product_id);
        Ok(product)
    }

    async fn archive_product(&self, id: i32) -> Result<ProductModel, RepositoryError> {
        info!("🗑️ Archiving product: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // No archived-state guard: re-archiving re-stamps deleted_at.
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET deleted_at = current_timestamp,
                is_active  = FALSE
            WHERE product_id = $1
            RETURNING product_id, title, description, price_cents, inventory, images, is_active, created_at, updated_at, deleted_at
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to archive product {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        product.ok_or(RepositoryError::NotFound)
    }

    async fn restore_product(&self, id: i32) -> Result<ProductModel, RepositoryError> {
        info!("🔄 Restoring product: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET deleted_at = NULL,
                is_active  = TRUE
            WHERE product_id = $1 AND deleted_at IS NOT NULL
            RETURNING product_id, title, description, price_cents, inventory, images, is_active, created_at, updated_at, deleted_at
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to restore product {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        product.ok_or(RepositoryError::NotFound)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        info!("❌ Hard deleting product: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE product_id = $1 AND deleted_at IS NOT NULL
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
