use crate::error::{ApiError, ErrorResponse};
use axum::{Extension, Json};
use serde::Serialize;
use tower_oauth2_resource_server::claims::DefaultClaims;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    pub sub: String,
}

/// Returns the subject identifier of the authenticated caller
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Successfully authenticated", body = MeResponse),
        (status = 401, description = "Missing or invalid JWT", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Authentication"
)]
pub async fn me(claims: Option<Extension<DefaultClaims>>) -> Result<Json<MeResponse>, ApiError> {
    let sub = claims
        .and_then(|Extension(claims)| claims.sub)
        .ok_or_else(ApiError::unauthorized)?;

    Ok(Json(MeResponse { sub }))
}
