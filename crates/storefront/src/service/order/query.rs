use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    domain::{
        requests::order::FindAllOrders,
        response::{api::ApiResponsePagination, order::OrderResponse, pagination::Pagination},
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    metrics: Metrics,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "order_query_service_request_counter",
            "Total number of requests to the OrderQueryService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "order_query_service_request_duration",
            "Histogram of request durations for the OrderQueryService",
            metrics.request_duration.clone(),
        );

        Self { query, metrics }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        info!(
            "📦 Finding orders | Page: {}, Size: {}",
            req.page, req.page_size
        );

        let started = Instant::now();

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        let (orders, total) = match self.query.find_all(req).await {
            Ok(res) => res,
            Err(e) => {
                error!("❌ Failed to fetch orders: {e:?}");
                self.metrics
                    .record(Method::Get, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
        let total_pages = ((total - 1) / page_size as i64) + 1;

        info!("✅ Found {} orders (total: {total})", data.len());
        self.metrics
            .record(Method::Get, Status::Success, started.elapsed().as_secs_f64());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Orders retrieved successfully".to_string(),
            data,
            pagination: Pagination {
                page,
                page_size,
                total_items: total as i32,
                total_pages: total_pages as i32,
            },
        })
    }
}
