//! OpenTelemetry bridge for the CLI.
//!
//! Spans are exported to stderr so generated text on stdout stays clean for
//! piping.

use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_sdk::{
    Resource,
    error::{OTelSdkError, OTelSdkResult},
    trace::{SdkTracerProvider, SpanData, SpanExporter},
};
use std::fmt::Write as _;
use std::io::Write as _;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for OpenTelemetry observability.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name for telemetry attribution
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Log level filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Writes finished spans to stderr, one line each.
#[derive(Debug, Clone)]
pub struct StderrSpanExporter {
    service_name: String,
}

impl StderrSpanExporter {
    /// Exporter that labels every line with the service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    fn format_batch(&self, batch: &[SpanData]) -> String {
        let mut out = String::new();
        for span in batch {
            let duration = span
                .end_time
                .duration_since(span.start_time)
                .unwrap_or(Duration::ZERO);
            let _ = write!(
                out,
                "[otel] service={} span={} trace_id={} span_id={} duration_ms={:.3}",
                self.service_name,
                span.name,
                span.span_context.trace_id(),
                span.span_context.span_id(),
                duration.as_secs_f64() * 1000.0,
            );
            for attribute in &span.attributes {
                let _ = write!(out, " {}={}", attribute.key.as_str(), attribute.value);
            }
            out.push('\n');
        }
        out
    }
}

impl SpanExporter for StderrSpanExporter {
    async fn export(&self, batch: Vec<SpanData>) -> OTelSdkResult {
        let lines = self.format_batch(&batch);
        std::io::stderr()
            .write_all(lines.as_bytes())
            .map_err(|e| OTelSdkError::InternalFailure(e.to_string()))
    }
}

/// Initialize tracing with an OpenTelemetry bridge.
///
/// This sets up:
/// - the same stderr log layer as `backlog_core::init_tracing`
/// - a stderr span exporter tagged with service name and version
pub fn init_observability(config: &ObservabilityConfig) -> Result<(), Box<dyn std::error::Error>> {
    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .with_attributes(vec![KeyValue::new(
            "service.version",
            config.service_version.clone(),
        )])
        .build();

    let provider = SdkTracerProvider::builder()
        .with_simple_exporter(StderrSpanExporter::new(config.service_name.clone()))
        .with_resource(resource)
        .build();

    global::set_tracer_provider(provider.clone());

    let tracer = provider.tracer(config.service_name.clone());
    let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()?;

    Ok(())
}
