//! menuboard server: HTTP API over the tenant directory, menu catalog,
//! and access policy.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// Build the full HTTP router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::auth::router())
        .merge(routes::restaurants::router())
        .merge(routes::menu_items::router())
        .merge(routes::menu::router())
        .merge(routes::admin::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
