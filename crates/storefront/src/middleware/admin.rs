use crate::abstract_trait::admin::DynAdminQueryRepository;
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use shared::errors::ErrorResponse;
use tracing::{error, warn};

/// Admin gate: the resolved identity must be a member of the `admins`
/// collection. Deny-by-default, including on lookup failure. Applied once to
/// the whole admin route group rather than repeated inside handlers.
pub async fn admin_middleware(
    Extension(admins): Extension<DynAdminQueryRepository>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let uid = match req.extensions().get::<String>() {
        Some(uid) => uid.clone(),
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    status: "fail".to_string(),
                    message: "You are not logged in, please provide token".to_string(),
                }),
            ));
        }
    };

    match admins.is_admin(&uid).await {
        Ok(true) => Ok(next.run(req).await),
        Ok(false) => {
            warn!("Rejected non-admin identity '{uid}'");
            Err((
                StatusCode::FORBIDDEN,
                Json(ErrorResponse {
                    status: "fail".to_string(),
                    message: "Your account is not an admin".to_string(),
                }),
            ))
        }
        Err(e) => {
            error!("❌ Admin membership lookup failed for '{uid}': {e:?}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    status: "error".to_string(),
                    message: "Failed to verify admin membership".to_string(),
                }),
            ))
        }
    }
}
