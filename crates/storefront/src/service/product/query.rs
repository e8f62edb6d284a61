use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::product::FindAllProducts,
        response::{
            api::{ApiResponse, ApiResponsePagination},
            pagination::Pagination,
            product::{ArchivedProductResponse, ProductResponse},
        },
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "product_query_service_request_counter",
            "Total number of requests to the ProductQueryService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "product_query_service_request_duration",
            "Histogram of request durations for the ProductQueryService",
            metrics.request_duration.clone(),
        );

        Self { query, metrics }
    }

    fn normalize(req: &FindAllProducts) -> (i32, i32) {
        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };
        (page, page_size)
    }

    fn pagination(page: i32, page_size: i32, total: i64) -> Pagination {
        let total_pages = ((total - 1) / page_size as i64) + 1;
        Pagination {
            page,
            page_size,
            total_items: total as i32,
            total_pages: total_pages as i32,
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_catalog(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🛍️ Finding catalog products | Page: {}, Size: {}, Search: '{}'",
            req.page, req.page_size, req.search
        );

        let started = Instant::now();
        let (page, page_size) = Self::normalize(req);

        let (products, total) = match self.query.find_catalog(req).await {
            Ok(res) => res,
            Err(e) => {
                error!("❌ Failed to fetch catalog products: {e:?}");
                self.metrics
                    .record(Method::Get, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        info!("✅ Found {} catalog products (total: {total})", data.len());
        self.metrics
            .record(Method::Get, Status::Success, started.elapsed().as_secs_f64());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Products retrieved successfully".to_string(),
            data,
            pagination: Self::pagination(page, page_size, total),
        })
    }

    async fn find_active(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🟢 Finding active products | Page: {}, Size: {}, Search: '{}'",
            req.page, req.page_size, req.search
        );

        let started = Instant::now();
        let (page, page_size) = Self::normalize(req);

        let (products, total) = match self.query.find_active(req).await {
            Ok(res) => res,
            Err(e) => {
                error!("❌ Failed to fetch active products: {e:?}");
                self.metrics
                    .record(Method::Get, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        info!("✅ Found {} active products (total: {total})", data.len());
        self.metrics
            .record(Method::Get, Status::Success, started.elapsed().as_secs_f64());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Active products retrieved successfully".to_string(),
            data,
            pagination: Self::pagination(page, page_size, total),
        })
    }

    async fn find_archived(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ArchivedProductResponse>>, ServiceError> {
        info!(
            "🗑️ Finding archived products | Page: {}, Size: {}, Search: '{}'",
            req.page, req.page_size, req.search
        );

        let started = Instant::now();
        let (page, page_size) = Self::normalize(req);

        let (products, total) = match self.query.find_archived(req).await {
            Ok(res) => res,
            Err(e) => {
                error!("❌ Failed to fetch archived products: {e:?}");
                self.metrics
                    .record(Method::Get, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<ArchivedProductResponse> = products
            .into_iter()
            .map(ArchivedProductResponse::from)
            .collect();

        info!("✅ Found {} archived products (total: {total})", data.len());
        self.metrics
            .record(Method::Get, Status::Success, started.elapsed().as_secs_f64());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Archived products retrieved successfully".to_string(),
            data,
            pagination: Self::pagination(page, page_size, total),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let started = Instant::now();

        let product = match self.query.find_by_id(id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                error!("❌ Product not found with ID: {id}");
                self.metrics
                    .record(Method::Get, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
            Err(e) => {
                error!("❌ Database error while finding product ID {id}: {e:?}");
                self.metrics
                    .record(Method::Get, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Product retrieved: '{}' (ID: {id})", product.title);
        self.metrics
            .record(Method::Get, Status::Success, started.elapsed().as_secs_f64());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product retrieved successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }
}
