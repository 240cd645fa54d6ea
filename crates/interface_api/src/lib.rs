//! HTTP API Layer
//!
//! This crate exposes the premium calculator over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: quote calculation and health check
//! - **Middleware**: request ids, tracing, request logging
//! - **DTOs**: request/response data transfer objects
//! - **Error Handling**: consistent `{error, message, details}` bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_premium::{PremiumCalculator, RatingConfig};
//! use interface_api::create_router;
//!
//! let app = create_router(PremiumCalculator::new(RatingConfig::default()));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_premium::PremiumCalculator;

use crate::handlers::{health, insurance};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub calculator: PremiumCalculator,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `calculator` - Premium calculator built from the loaded rating configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(calculator: PremiumCalculator) -> Router {
    let state = AppState { calculator };

    let insurance_routes = Router::new().route("/calculate", post(insurance::calculate));

    let api_routes = Router::new()
        .nest("/insurance", insurance_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}
