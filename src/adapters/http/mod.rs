//! HTTP adapters - REST API implementations.
//!
//! - `wizard` - session lifecycle, events and derived views under `/api/wizard`
//! - `catalog` - read-only reference tables under `/api/catalog`
//!
//! [`build_app`] wires the application handlers to the routers and applies
//! the cross-cutting layers selected by configuration.

pub mod catalog;
pub mod wizard;

use std::sync::Arc;

use axum::{routing::get, Router};
use http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::application::{
    ApplyWizardEventHandler, BuildContactLinkHandler, EndWizardHandler, GetWizardViewHandler,
    StartWizardHandler,
};
use crate::config::AppConfig;
use crate::domain::catalog::ReferenceTables;
use crate::ports::WizardSessionRepository;

pub use catalog::catalog_routes;
pub use wizard::{wizard_routes, WizardHandlers};

/// Builds the full application router over `repository`.
pub fn build_app(config: &AppConfig, repository: Arc<dyn WizardSessionRepository>) -> Router {
    let tables = ReferenceTables::standard();

    let handlers = WizardHandlers::new(
        Arc::new(StartWizardHandler::new(repository.clone(), tables)),
        Arc::new(ApplyWizardEventHandler::new(repository.clone(), tables)),
        Arc::new(GetWizardViewHandler::new(repository.clone(), tables)),
        Arc::new(BuildContactLinkHandler::new(
            repository.clone(),
            tables,
            config.contact.link_builder(),
        )),
        Arc::new(EndWizardHandler::new(repository)),
    );

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/wizard", wizard_routes(handlers))
        .nest("/api/catalog", catalog_routes(tables))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server.cors_origins));

    if config.features.enable_tracing {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Any origin when none are configured, otherwise only the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(allowed)
}
