//! HTTP server for the contact endpoints.
//!
//! Routes:
//! - `POST /api/contact`: contact inquiry
//! - `POST /api/quote`: quote request
//! - `GET /api/contact/schema`: JSON Schema of the contact body
//! - `GET /health`: liveness

pub mod handlers;

use crate::metrics::SubmissionMetrics;
use crate::services::ContactService;
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Whether submissions can be relayed.
///
/// Chosen once at startup. `Unconfigured` keeps the server up but refuses
/// every submission before any email is attempted.
#[derive(Clone)]
pub enum Mailer {
    Ready(Arc<dyn ContactService>),
    Unconfigured(String),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub mailer: Mailer,
    pub metrics: Arc<SubmissionMetrics>,
}

impl AppState {
    pub fn new(mailer: Mailer) -> Self {
        Self {
            mailer,
            metrics: Arc::new(SubmissionMetrics::new()),
        }
    }
}

/// Build the router with all routes and tracing middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/contact/schema", get(handlers::contact_schema))
        .route("/api/quote", post(handlers::submit_quote))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `router` on `bind_address` until `shutdown` resolves.
pub async fn run_server<F>(bind_address: &str, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    tracing::info!("Contact endpoint listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
