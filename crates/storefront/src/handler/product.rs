use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::product::{FindAllProducts, ImageUpload, SaveProductRequest},
        response::{
            api::{ApiResponse, ApiResponsePagination},
            product::{ArchivedProductResponse, ProductResponse},
        },
    },
    middleware::{admin::admin_middleware, jwt::auth_middleware},
    state::AppState,
    subscription::CatalogFeed,
};
use axum::{
    Json,
    extract::{Extension, Multipart, Path, Query},
    http::StatusCode,
    middleware,
    response::{
        IntoResponse,
        sse::{Event, KeepAlive, Sse},
    },
    routing::{delete, get, post, put},
};
use futures::stream::{self, Stream};
use shared::errors::HttpError;
use std::{convert::Infallible, sync::Arc};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    params(FindAllProducts),
    responses(
        (status = 200, description = "Active catalog products", body = ApiResponsePagination<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_catalog_products(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_catalog(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/stream",
    tag = "Product",
    responses(
        (status = 200, description = "Server-sent catalog snapshots; each event replaces the previous view")
    )
)]
pub async fn stream_catalog(
    Extension(feed): Extension<CatalogFeed>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let subscription = feed.subscribe();
    let initial = Some(subscription.current());

    let stream = stream::unfold((subscription, initial), |(mut sub, pending)| async move {
        let snapshot = match pending {
            Some(snapshot) => snapshot,
            None => sub.changed().await?,
        };
        let event = Event::default().event("catalog").json_data(&snapshot).ok()?;
        Some((Ok::<_, Infallible>(event), (sub, None)))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

#[utoipa::path(
    get,
    path = "/api/admin/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(FindAllProducts),
    responses(
        (status = 200, description = "Active products", body = ApiResponsePagination<Vec<ProductResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_active_products(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_active(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/admin/products/archived",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(FindAllProducts),
    responses(
        (status = 200, description = "Archived products awaiting purge", body = ApiResponsePagination<Vec<ArchivedProductResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_archived_products(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_archived(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Pulls the save form out of a multipart body: scalar fields plus an
/// optional `image` part.
async fn parse_save_form(
    mut multipart: Multipart,
) -> Result<(SaveProductRequest, Option<ImageUpload>), HttpError> {
    let mut req = SaveProductRequest {
        product_id: None,
        title: String::new(),
        description: String::new(),
        price_cents: 0,
        inventory: 0,
        is_active: None,
    };
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "image" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| HttpError::BadRequest(format!("Failed to read image: {e}")))?;

                if !bytes.is_empty() {
                    image = Some(ImageUpload {
                        filename,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            other => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| HttpError::BadRequest(format!("Failed to read field: {e}")))?;

                match other {
                    "product_id" if !value.is_empty() => {
                        let id = value.parse::<i32>().map_err(|_| {
                            HttpError::BadRequest("product_id must be an integer".to_string())
                        })?;
                        req.product_id = Some(id);
                    }
                    "title" => req.title = value,
                    "description" => req.description = value,
                    "price_cents" if !value.is_empty() => {
                        req.price_cents = value.parse::<i64>().map_err(|_| {
                            HttpError::BadRequest("price_cents must be an integer".to_string())
                        })?;
                    }
                    "inventory" if !value.is_empty() => {
                        req.inventory = value.parse::<i32>().map_err(|_| {
                            HttpError::BadRequest("inventory must be an integer".to_string())
                        })?;
                    }
                    "is_active" if !value.is_empty() => {
                        req.is_active = Some(value == "true" || value == "1");
                    }
                    _ => {}
                }
            }
        }
    }

    Ok((req, image))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product saved", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin"),
        (status = 503, description = "Image upload failed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn save_product_handler(
    Extension(service): Extension<DynProductCommandService>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let (req, image) = parse_save_form(multipart).await?;
    let response = service.save_product(&req, image.as_ref()).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product archived", body = ApiResponse<ArchivedProductResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn archive_product_handler(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.archive_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/restore/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product restored", body = ApiResponse<ProductResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Product not found or not archived"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn restore_product_handler(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.restore_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/purge/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product and its images permanently deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn purge_product_handler(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.purge_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public = OpenApiRouter::new()
        .route("/api/products", get(get_catalog_products))
        .route("/api/products/stream", get(stream_catalog))
        .route("/api/products/{id}", get(get_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.catalog_feed.clone()));

    let admin = OpenApiRouter::new()
        .route("/api/admin/products", get(get_active_products))
        .route("/api/admin/products", post(save_product_handler))
        .route("/api/admin/products/archived", get(get_archived_products))
        .route("/api/admin/products/{id}", delete(archive_product_handler))
        .route(
            "/api/admin/products/restore/{id}",
            put(restore_product_handler),
        )
        .route(
            "/api/admin/products/purge/{id}",
            delete(purge_product_handler),
        )
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
        .layer(Extension(app_state.di_container.admin_query.clone()))
        .layer(Extension(app_state.jwt_service.clone()));

    public.merge(admin)
}
