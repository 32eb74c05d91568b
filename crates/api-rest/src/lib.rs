//! # API REST
//!
//! REST API implementation for the ward board.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, CORS, static file fallback)
//!
//! Persistence is delegated to a `ward_core::PatientStore` supplied by the caller.

#![warn(rust_2018_idioms)]

pub mod handlers;
pub mod types;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, put},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use ward_core::PatientStore;

/// Application state for the REST API server
///
/// Shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn PatientStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PatientStore>) -> Self {
        Self { store }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_patients,
        handlers::create_patient,
        handlers::update_patient,
        handlers::delete_patient,
    ),
    components(schemas(
        types::HealthRes,
        types::ErrorRes,
        types::MessageRes,
        types::PatientReq,
        types::PatientRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router.
///
/// Requests that match no route are served from `static_dir` when one is given. Hidden files
/// (any path segment starting with `.`) are never served.
pub fn router(store: Arc<dyn PatientStore>, static_dir: Option<&Path>) -> Router {
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/patients",
            get(handlers::list_patients).post(handlers::create_patient),
        )
        .route(
            "/api/patients/:id",
            put(handlers::update_patient).delete(handlers::delete_patient),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(AppState::new(store));

    let app = match static_dir {
        Some(dir) => app.fallback_service(static_files(dir)),
        None => app,
    };

    app.layer(CorsLayer::permissive())
}

fn static_files(dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(middleware::from_fn(hide_dotfiles))
}

async fn hide_dotfiles(request: Request, next: Next) -> Response {
    if request.uri().path().split('/').any(is_hidden_segment) {
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(request).await
}

/// `ServeDir` percent-decodes paths, so an encoded leading dot counts too.
fn is_hidden_segment(segment: &str) -> bool {
    segment.starts_with('.')
        || segment
            .get(..3)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("%2e"))
}
