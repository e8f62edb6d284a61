use crate::{
    abstract_trait::{
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::ProductCommandServiceTrait,
        },
        storage::DynObjectStore,
    },
    domain::{
        requests::product::{
            CreateProductRecordRequest, FindAllProducts, ImageUpload, SaveProductRequest,
            UpdateProductRecordRequest,
        },
        response::{
            api::ApiResponse,
            product::{ArchivedProductResponse, ProductResponse},
        },
    },
    media::{self, ImageOptions},
    model::product::Product as ProductModel,
    subscription::CatalogFeed,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status},
};
use std::path::Path;
use tokio::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

/// Snapshot size pushed to catalog subscribers on each mutation.
const FEED_PAGE_SIZE: i32 = 200;

#[derive(Clone)]
pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    storage: DynObjectStore,
    feed: CatalogFeed,
    metrics: Metrics,
    image_options: ImageOptions,
    retention_days: i64,
}

impl ProductCommandService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        storage: DynObjectStore,
        feed: CatalogFeed,
        retention_days: i64,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "product_command_service_request_counter",
            "Total number of requests to the ProductCommandService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "product_command_service_request_duration",
            "Histogram of request durations for the ProductCommandService",
            metrics.request_duration.clone(),
        );

        Self {
            query,
            command,
            storage,
            feed,
            metrics,
            image_options: ImageOptions::default(),
            retention_days,
        }
    }

    fn track(&self, method: Method, status: Status, started: Instant) {
        self.metrics
            .record(method, status, started.elapsed().as_secs_f64());
    }

    /// Republish the active catalog after a mutation. Best-effort: a failed
    /// refresh only costs subscribers one delivery.
    async fn refresh_feed(&self) {
        let req = FindAllProducts {
            page: 1,
            page_size: FEED_PAGE_SIZE,
            search: String::new(),
        };
        match self.query.find_catalog(&req).await {
            Ok((products, _)) => {
                self.feed
                    .publish(products.into_iter().map(ProductResponse::from).collect());
            }
            Err(err) => {
                warn!("Failed to refresh catalog feed: {err}");
            }
        }
    }

    async fn upload_image(&self, upload: &ImageUpload) -> Result<String, ServiceError> {
        let prepared = media::prepare_image(&upload.bytes, &self.image_options);

        // A fallback to the original bytes keeps the original extension.
        let transcoded = prepared.as_slice() != upload.bytes.as_slice();
        let extension = if transcoded {
            self.image_options.format.extension().to_string()
        } else {
            Path::new(&upload.filename)
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("bin")
                .to_string()
        };

        let key = format!("product_images/{}.{extension}", Uuid::new_v4());

        info!(
            "📤 Uploading image '{}' as '{key}' ({} bytes)",
            upload.filename,
            prepared.len()
        );

        let locator = self.storage.put(&key, &prepared).await?;
        Ok(locator)
    }

    /// One record's purge: best-effort blob cleanup, then the authoritative
    /// row delete. Stray blobs are acceptable garbage; a stray row pointing
    /// at deleted blobs is not.
    async fn purge_record(&self, product: &ProductModel) -> Result<(), ServiceError> {
        for locator in &product.images {
            if let Err(err) = self.storage.delete(locator).await {
                warn!(
                    "Failed to delete object '{locator}' for product {}: {err}",
                    product.product_id
                );
            }
        }

        self.command
            .delete_product(product.product_id)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(())
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn save_product(
        &self,
        req: &SaveProductRequest,
        image: Option<&ImageUpload>,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("💾 Saving product '{}'", req.title);

        let started = Instant::now();
        let method = if req.product_id.is_some() {
            Method::Put
        } else {
            Method::Post
        };

        // Bad input is rejected before any repository or storage call.
        if let Err(errors) = req.validate() {
            self.track(method, Status::Error, started);
            return Err(ServiceError::from(errors));
        }

        let uploaded = match image {
            Some(upload) => match self.upload_image(upload).await {
                Ok(locator) => Some(locator),
                Err(err) => {
                    // An aborted upload aborts the whole save so the record
                    // never points at a missing blob.
                    error!("❌ Image upload failed, aborting save: {err}");
                    self.track(method, Status::Error, started);
                    return Err(err);
                }
            },
            None => None,
        };

        let result = match req.product_id {
            None => {
                self.command
                    .create_product(&CreateProductRecordRequest {
                        title: req.title.clone(),
                        description: req.description.clone(),
                        price_cents: req.price_cents,
                        inventory: req.inventory,
                        images: uploaded.into_iter().collect(),
                    })
                    .await
            }
            Some(product_id) => {
                self.command
                    .update_product(&UpdateProductRecordRequest {
                        product_id,
                        title: req.title.clone(),
                        description: req.description.clone(),
                        price_cents: req.price_cents,
                        inventory: req.inventory,
                        images: uploaded.map(|locator| vec![locator]),
                        is_active: req.is_active,
                    })
                    .await
            }
        };

        match result {
            Ok(product) => {
                info!("✅ Saved product ID {}", product.product_id);
                self.track(method, Status::Success, started);
                self.refresh_feed().await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Product saved successfully".to_string(),
                    data: ProductResponse::from(product),
                })
            }
            Err(e) => {
                error!("❌ Failed to save product '{}': {e:?}", req.title);
                self.track(method, Status::Error, started);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn archive_product(
        &self,
        id: i32,
    ) -> Result<ApiResponse<ArchivedProductResponse>, ServiceError> {
        info!("🗑️ Archiving product: {id}");

        let started = Instant::now();

        match self.command.archive_product(id).await {
            Ok(product) => {
                self.track(Method::Delete, Status::Success, started);
                self.refresh_feed().await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Product archived successfully".to_string(),
                    data: ArchivedProductResponse::from(product),
                })
            }
            Err(e) => {
                error!("❌ Failed to archive product {id}: {e:?}");
                self.track(Method::Delete, Status::Error, started);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn restore_product(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🔄 Restoring product: {id}");

        let started = Instant::now();

        match self.command.restore_product(id).await {
            Ok(product) => {
                self.track(Method::Put, Status::Success, started);
                self.refresh_feed().await;

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Product restored successfully".to_string(),
                    data: ProductResponse::from(product),
                })
            }
            Err(e) => {
                error!("❌ Failed to restore product {id}: {e:?}");
                self.track(Method::Put, Status::Error, started);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn purge_product(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🔥 Permanently deleting product: {id}");

        let started = Instant::now();

        let product = match self.query.find_by_id(id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                self.track(Method::Delete, Status::Error, started);
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
            Err(e) => {
                self.track(Method::Delete, Status::Error, started);
                return Err(ServiceError::Repo(e));
            }
        };

        if product.deleted_at.is_none() {
            self.track(Method::Delete, Status::Error, started);
            return Err(ServiceError::Custom(
                "Product must be archived before permanent deletion".to_string(),
            ));
        }

        // The admin-confirmed path deletes immediately; only the scheduled
        // sweep enforces the retention age.
        match self.purge_record(&product).await {
            Ok(()) => {
                info!("✅ Purged product {id}");
                self.track(Method::Delete, Status::Success, started);

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Product permanently deleted".to_string(),
                    data: (),
                })
            }
            Err(e) => {
                error!("❌ Failed to purge product {id}: {e:?}");
                self.track(Method::Delete, Status::Error, started);
                Err(e)
            }
        }
    }

    async fn sweep_expired(&self) -> Result<u64, ServiceError> {
        let cutoff = Utc::now() - Duration::days(self.retention_days);
        info!("🧹 Sweeping products archived at or before {cutoff}");

        let started = Instant::now();

        let candidates = match self.query.find_purge_eligible(cutoff).await {
            Ok(candidates) => candidates,
            Err(e) => {
                self.track(Method::Delete, Status::Error, started);
                return Err(ServiceError::Repo(e));
            }
        };

        info!("🧹 Found {} archived products to purge", candidates.len());

        let mut purged = 0u64;
        for product in &candidates {
            // Each candidate is an independent unit of work; one failure
            // never aborts the rest of the sweep.
            match self.purge_record(product).await {
                Ok(()) => {
                    info!("✅ Purged product {}", product.product_id);
                    purged += 1;
                }
                Err(err) => {
                    error!("❌ Failed to purge product {}: {err}", product.product_id);
                }
            }
        }

        self.track(Method::Delete, Status::Success, started);

        Ok(purged)
    }
}
