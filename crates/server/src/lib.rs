pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod utils;

use crate::{doc::ApiDoc, state::AppState};
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router.
///
/// With `auth` present every domain route and `/me` require a valid bearer token.
/// `/health` and the Swagger UI stay public.
pub fn app(state: AppState, auth: Option<OAuth2ResourceServer>) -> Router {
    let mut api = Router::new()
        .route("/me", get(routes::auth::me))
        .merge(routes::alunos::router())
        .merge(routes::professores::router())
        .merge(routes::cursos::router())
        .merge(routes::turmas::router())
        .merge(routes::matriculas::router());

    if let Some(auth) = auth {
        api = api.layer(ServiceBuilder::new().layer(auth.into_layer()));
    }

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(api)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
}
