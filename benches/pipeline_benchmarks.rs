//! Performance benchmarks for the submission pipeline.
//!
//! These benchmarks measure the CPU-bound steps a submission goes through:
//! - Validation of an untrusted JSON body
//! - Rendering the staff notification
//! - Building a prefilled mailto link
//! - The full relay through the router, with a no-op email sender

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use chrono::Utc;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use enercam_contact::delivery::MailtoLink;
use enercam_contact::error::EmailApiResult;
use enercam_contact::server::{router, AppState, Mailer};
use enercam_contact::{
    templates, validate_contact, ContactServiceImpl, EmailSender, MailRoute, OutboundEmail,
    SentEmail, SiteProfile,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tower::ServiceExt;

struct NoopSender;

#[async_trait]
impl EmailSender for NoopSender {
    async fn send(&self, _email: &OutboundEmail) -> EmailApiResult<SentEmail> {
        Ok(SentEmail {
            id: "bench".to_string(),
        })
    }
}

fn body_with_message(len: usize) -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "phone": "+237 622 000 000",
        "location": "Central African Republic",
        "interest": "quote",
        "message": "a".repeat(len),
    })
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_contact");
    for len in [10, 1_000, 10_000] {
        let body = body_with_message(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &body, |b, body| {
            b.iter(|| validate_contact(body))
        });
    }
    group.finish();
}

fn bench_notification(c: &mut Criterion) {
    let submission = validate_contact(&body_with_message(2_000)).unwrap();
    let received = Utc::now();

    c.bench_function("render_notification", |b| {
        b.iter(|| {
            templates::notification(&submission, "noreply@enercam.com", "sales@enercam.com", received)
        })
    });
}

fn bench_mailto(c: &mut Criterion) {
    let submission = validate_contact(&body_with_message(2_000)).unwrap();

    c.bench_function("mailto_uri", |b| {
        b.iter(|| MailtoLink::for_submission("info@enercam.com", &submission).to_uri())
    });
}

fn bench_relay(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let service = ContactServiceImpl::new(
        Arc::new(NoopSender),
        MailRoute {
            from: "noreply@enercam.com".to_string(),
            staff: "sales@enercam.com".to_string(),
        },
        SiteProfile::default(),
    );
    let app = router(AppState::new(Mailer::Ready(Arc::new(service))));
    let payload = body_with_message(200).to_string();

    c.bench_function("relay_contact", |b| {
        b.to_async(&rt).iter(|| async {
            let request = Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header("content-type", "application/json")
                .body(Body::from(payload.clone()))
                .unwrap();
            let _response = app.clone().oneshot(request).await;
        });
    });
}

criterion_group!(benches, bench_validate, bench_notification, bench_mailto, bench_relay);
criterion_main!(benches);
