use crate::{
    abstract_trait::inquiry::DynInquiryService,
    domain::requests::inquiry::CreateInquiryRequest,
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/inquiries",
    tag = "Inquiry",
    request_body = CreateInquiryRequest,
    responses(
        (status = 201, description = "Inquiry received"),
        (status = 400, description = "Validation failure"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_inquiry(
    Extension(service): Extension<DynInquiryService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateInquiryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_inquiry(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn inquiry_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/inquiries", post(create_inquiry))
        .layer(Extension(app_state.di_container.inquiry_service.clone()))
}
