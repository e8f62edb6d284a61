use crate::{
    abstract_trait::review::DynReviewService,
    domain::{
        requests::review::CreateReviewRequest,
        response::{api::ApiResponse, review::ReviewResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ReviewListParams {
    pub limit: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "Review",
    params(ReviewListParams),
    responses(
        (status = 200, description = "Approved reviews, newest first", body = ApiResponse<Vec<ReviewResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_reviews(
    Extension(service): Extension<DynReviewService>,
    Query(params): Query<ReviewListParams>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_approved(params.limit).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "Review",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review submitted", body = ApiResponse<ReviewResponse>),
        (status = 400, description = "Validation failure"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_review(
    Extension(service): Extension<DynReviewService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateReviewRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_review(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn review_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/reviews", get(get_reviews))
        .route("/api/reviews", post(create_review))
        .layer(Extension(app_state.di_container.review_service.clone()))
}
