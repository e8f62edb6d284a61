use crate::{
    abstract_trait::inquiry::{DynInquiryRepository, InquiryServiceTrait},
    domain::{requests::inquiry::CreateInquiryRequest, response::api::ApiResponse},
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
pub struct InquiryService {
    repository: DynInquiryRepository,
    metrics: Metrics,
}

impl InquiryService {
    pub fn new(repository: DynInquiryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "inquiry_service_request_counter",
            "Total number of requests to the InquiryService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "inquiry_service_request_duration",
            "Histogram of request durations for the InquiryService",
            metrics.request_duration.clone(),
        );

        Self {
            repository,
            metrics,
        }
    }
}

#[async_trait]
impl InquiryServiceTrait for InquiryService {
    async fn create_inquiry(
        &self,
        req: &CreateInquiryRequest,
    ) -> Result<ApiResponse<()>, ServiceError> {
        info!("✉️ Creating inquiry from '{}'", req.email);

        let started = Instant::now();

        if let Err(errors) = req.validate() {
            self.metrics
                .record(Method::Post, Status::Error, started.elapsed().as_secs_f64());
            return Err(ServiceError::from(errors));
        }

        match self.repository.create_inquiry(req).await {
            Ok(_) => {
                self.metrics.record(
                    Method::Post,
                    Status::Success,
                    started.elapsed().as_secs_f64(),
                );

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Message sent, we will contact you soon".to_string(),
                    data: (),
                })
            }
            Err(e) => {
                error!("❌ Failed to create inquiry: {e:?}");
                self.metrics
                    .record(Method::Post, Status::Error, started.elapsed().as_secs_f64());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
