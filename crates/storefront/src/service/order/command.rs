use crate::{
    abstract_trait::order::{
        repository::DynOrderCommandRepository, service::OrderCommandServiceTrait,
    },
    domain::{
        requests::order::CreateOrderRequest,
        response::{api::ApiResponse, order::OrderResponse},
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
use validator::Validate;

#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    metrics: Metrics,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "order_command_service_request_counter",
            "Total number of requests to the OrderCommandService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "order_command_service_request_duration",
            "Histogram of request durations for the OrderCommandService",
            metrics.request_duration.clone(),
        );

        Self { command, metrics }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🛒 Creating order for product {}", req.product_id);

        let started = Instant::now();

        if let Err(errors) = req.validate() {
            self.metrics
                .record(Method::Post, Status::Error, started.elapsed().as_secs_f64());
            return Err(ServiceError::from(errors));
        }

        match self.command.create_order(req).await {
            Ok(order) => {
                self.metrics.record(
                    Method::Post,
                    Status::Success,
                    started.elapsed().as_secs_f64(),
                );

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Order request received".to_string(),
                    data: OrderResponse::from(order),
                })
            }
            Err(e) => {
                error!(
                    "❌ Failed to create order for product {}: {e:?}",
                    req.product_id
                );
                self.metrics
                    .record(Method::Post, Status::Error, started.elapsed().as_secs_f64());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn mark_processed(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("✔️ Marking order processed: {id}");

        let started = Instant::now();

        match self.command.mark_processed(id).await {
            Ok(order) => {
                self.metrics.record(
                    Method::Put,
                    Status::Success,
                    started.elapsed().as_secs_f64(),
                );

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Order marked as processed".to_string(),
                    data: OrderResponse::from(order),
                })
            }
            Err(e) => {
                error!("❌ Failed to mark order {id} processed: {e:?}");
                self.metrics
                    .record(Method::Put, Status::Error, started.elapsed().as_secs_f64());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
