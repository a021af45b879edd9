//! Enercam contact endpoint - main entry point.
//!
//! Serves the contact and quote endpoints. Starts even when the email provider
//! is not configured; submissions are then refused with a 503 until the server
//! is restarted with it configured.

use anyhow::Result;
use enercam_contact::server::{self, AppState, Mailer};
use enercam_contact::{AsyncResendClient, Config, ContactServiceImpl, EmailConfig, ResendClient};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");

    let (mailer, provider) = match EmailConfig::from_env() {
        Ok(email_config) => {
            info!(
                "Email provider at {}, notifications to {}",
                email_config.api_base_url, email_config.to
            );
            let client = AsyncResendClient::new(ResendClient::new(
                &email_config,
                config.request_timeout,
            ));
            let service = ContactServiceImpl::new(
                Arc::new(client.clone()),
                (&email_config).into(),
                config.site.clone(),
            );
            (Mailer::Ready(Arc::new(service)), Some(client))
        }
        Err(e) => {
            error!("Email service not configured: {}", e);
            warn!("All submissions will be refused until the email provider is configured");
            (Mailer::Unconfigured(e.to_string()), None)
        }
    };

    let state = AppState::new(mailer);
    let metrics = state.metrics.clone();

    server::run_server(&config.bind_address, state, shutdown_signal()).await?;

    let summary = metrics.summary();
    info!(
        received = summary.received,
        delivered = summary.delivered,
        rejected_invalid = summary.rejected_invalid,
        rejected_unconfigured = summary.rejected_unconfigured,
        delivery_failed = summary.delivery_failed,
        partial_deliveries = summary.partial_deliveries,
        "Submission totals"
    );
    if let Some(client) = provider {
        let http = client.inner().metrics();
        info!(
            requests = http.http_requests_total(),
            errors = http.http_errors_total(),
            emails_sent = http.emails_sent_total(),
            avg_ms = http.http_duration_avg_ms(),
            "Email provider totals"
        );
    }

    info!("Contact endpoint shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
