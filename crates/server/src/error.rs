use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use database::ServiceError;
use log::error;
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every error answered by the API
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub mensagem: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    mensagem: String,
}

impl ApiError {
    pub fn new(status: StatusCode, mensagem: impl Into<String>) -> Self {
        Self {
            status,
            mensagem: mensagem.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Não autenticado")
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => Self::new(StatusCode::BAD_REQUEST, e.mensagem()),
            ServiceError::Database(e) => {
                error!("Database error: {e}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Erro interno do servidor")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            rejection.status(),
            format!("Corpo da requisição inválido: {}", rejection.body_text()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            timestamp: Utc::now(),
            status: self.status.as_u16(),
            mensagem: self.mensagem,
        };
        (self.status, Json(body)).into_response()
    }
}
