#![cfg(feature = "observability")]

// Global subscriber state: everything that installs it lives in one test.

use backlog::observability::{ObservabilityConfig, StderrSpanExporter, init_observability};
use opentelemetry_sdk::trace::SpanExporter;

#[tokio::test]
async fn test_init_observability_installs_once() {
    let config = ObservabilityConfig::new("backlog-test").with_log_level("debug");

    assert!(init_observability(&config).is_ok());

    tracing::info_span!("generate", kind = "PRD").in_scope(|| {
        tracing::info!("inside span");
    });

    assert!(init_observability(&config).is_err());
}

#[tokio::test]
async fn test_stderr_exporter_accepts_empty_batch() {
    let exporter = StderrSpanExporter::new("backlog-test");
    assert!(exporter.export(Vec::new()).await.is_ok());
}
