use crate::{
    abstract_trait::review::{DynReviewRepository, ReviewServiceTrait},
    domain::{
        requests::review::CreateReviewRequest,
        response::{api::ApiResponse, review::ReviewResponse},
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

/// The storefront shows six review cards.
const DEFAULT_REVIEW_LIMIT: i64 = 6;

#[derive(Clone)]
pub struct ReviewService {
    repository: DynReviewRepository,
    metrics: Metrics,
}

impl ReviewService {
    pub fn new(repository: DynReviewRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "review_service_request_counter",
            "Total number of requests to the ReviewService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "review_service_request_duration",
            "Histogram of request durations for the ReviewService",
            metrics.request_duration.clone(),
        );

        Self {
            repository,
            metrics,
        }
    }
}

#[async_trait]
impl ReviewServiceTrait for ReviewService {
    async fn create_review(
        &self,
        req: &CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError> {
        info!("⭐ Creating review from '{}'", req.name);

        let started = Instant::now();

        if let Err(errors) = req.validate() {
            self.metrics
                .record(Method::Post, Status::Error, started.elapsed().as_secs_f64());
            return Err(ServiceError::from(errors));
        }

        // Submissions auto-approve; the flag exists for future moderation.
        match self.repository.create_review(req, true).await {
            Ok(review) => {
                self.metrics.record(
                    Method::Post,
                    Status::Success,
                    started.elapsed().as_secs_f64(),
                );

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Review submitted successfully".to_string(),
                    data: ReviewResponse::from(review),
                })
            }
            Err(e) => {
                error!("❌ Failed to create review: {e:?}");
                self.metrics
                    .record(Method::Post, Status::Error, started.elapsed().as_secs_f64());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_approved(
        &self,
        limit: Option<i64>,
    ) -> Result<ApiResponse<Vec<ReviewResponse>>, ServiceError> {
        let limit = limit.unwrap_or(DEFAULT_REVIEW_LIMIT).max(1);
        info!("⭐ Finding up to {limit} approved reviews");

        let started = Instant::now();

        match self.repository.find_approved(limit).await {
            Ok(reviews) => {
                self.metrics.record(
                    Method::Get,
                    Status::Success,
                    started.elapsed().as_secs_f64(),
                );

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Reviews retrieved successfully".to_string(),
                    data: reviews.into_iter().map(ReviewResponse::from).collect(),
                })
            }
            Err(e) => {
                error!("❌ Failed to fetch reviews: {e:?}");
                self.metrics
                    .record(Method::Get, Status::Error, started.elapsed().as_secs_f64());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
