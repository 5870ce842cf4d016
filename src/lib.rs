// Library root for the portfolio backend API

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod notifier;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use catalog::ProjectSource;
use handlers::{contact::submit_contact, health_check, projects::list_projects};
use middleware::{create_middleware_stack, preflight_no_content};
use notifier::Notifier;

// Re-export commonly used types
pub use catalog::StaticCatalog;
pub use config::{Config, TelegramConfig};
pub use error::{ApiError, ApiResult};
pub use models::{ContactRequest, ContactSubmission, ProjectRecord};

/// Per-process dependencies shared by all handlers. Both members are
/// constructed once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub notifier: Arc<Notifier>,
    pub catalog: Arc<dyn ProjectSource>,
}

impl AppState {
    pub fn new(notifier: Notifier, catalog: impl ProjectSource + 'static) -> Self {
        AppState {
            notifier: Arc::new(notifier),
            catalog: Arc::new(catalog),
        }
    }
}

/// Create the Axum router with all endpoints and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/api/health", get(health_check))
        // Portfolio projects
        .route("/api/projects", get(list_projects))
        // Contact form relay; pre-flight OPTIONS is answered by the CORS
        // layer and normalized to 204 below
        .route("/api/contact", post(submit_contact))
        // Add shared state (notifier + catalog)
        .with_state(state)
        // Apply middleware stack
        .layer(create_middleware_stack())
        // Outermost: pre-flight responses become an empty 204
        .layer(axum::middleware::from_fn(preflight_no_content))
}
