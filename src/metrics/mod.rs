//! Basic metrics instrumentation.
//!
//! Two collectors: [`Metrics`] counts provider HTTP traffic per client, and
//! [`SubmissionMetrics`] counts how inquiries move through the endpoint.
//! Both are cheap atomic counters meant to be logged, not scraped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector for email provider traffic.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Emails the provider accepted
    emails_sent_total: Arc<AtomicU64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_email_sent(&self) {
        self.emails_sent_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    pub fn emails_sent_total(&self) -> u64 {
        self.emails_sent_total.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }
}

/// Counters for the contact endpoints.
#[derive(Debug, Default)]
pub struct SubmissionMetrics {
    received: AtomicU64,
    rejected_invalid: AtomicU64,
    rejected_unconfigured: AtomicU64,
    delivered: AtomicU64,
    delivery_failed: AtomicU64,
    partial_deliveries: AtomicU64,
}

impl SubmissionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    /// Body was malformed or failed validation.
    pub fn record_invalid(&self) {
        self.rejected_invalid.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unconfigured(&self) {
        self.rejected_unconfigured.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    /// A delivery failed; `partial` when staff were already notified.
    pub fn record_delivery_failed(&self, partial: bool) {
        self.delivery_failed.fetch_add(1, Ordering::Relaxed);
        if partial {
            self.partial_deliveries.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn summary(&self) -> SubmissionSummary {
        SubmissionSummary {
            received: self.received.load(Ordering::Relaxed),
            rejected_invalid: self.rejected_invalid.load(Ordering::Relaxed),
            rejected_unconfigured: self.rejected_unconfigured.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            delivery_failed: self.delivery_failed.load(Ordering::Relaxed),
            partial_deliveries: self.partial_deliveries.load(Ordering::Relaxed),
        }
    }
}

/// A snapshot of submission counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionSummary {
    pub received: u64,
    pub rejected_invalid: u64,
    pub rejected_unconfigured: u64,
    pub delivered: u64,
    pub delivery_failed: u64,
    pub partial_deliveries: u64,
}
