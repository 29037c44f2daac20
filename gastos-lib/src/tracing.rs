use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::Error;
use anyhow::Context;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing::Span;
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder, TracingLogger};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

/// Root span for every request. `resource_id` is filled in by handlers that address a single
/// record.
pub struct GastosRootSpanBuilder;

impl RootSpanBuilder for GastosRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> Span {
        tracing_actix_web::root_span!(request, resource_id = tracing::field::Empty)
    }

    fn on_request_end<B: actix_web::body::MessageBody>(
        span: Span,
        outcome: &Result<ServiceResponse<B>, Error>,
    ) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

pub fn create_middleware() -> TracingLogger<GastosRootSpanBuilder> {
    TracingLogger::<GastosRootSpanBuilder>::new()
}

/// Installs the global subscriber, printing events at `log_level` and above.
pub fn init_subscriber(log_level: &str) -> Result<(), anyhow::Error> {
    let level = LevelFilter::from_str(log_level)
        .with_context(|| format!("Invalid log level {}", log_level))?;

    let subscriber = registry::Registry::default()
        .with(level)
        .with(tracing_subscriber::fmt::Layer::default());
    tracing::subscriber::set_global_default(subscriber)
        .context("Unable to set global subscriber")?;
    Ok(())
}
