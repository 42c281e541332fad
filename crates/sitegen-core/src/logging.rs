//! # Observability & Tracing
//!
//! Structured logging setup for binaries and tests built on the sitegen
//! contracts. Log level is controlled through the `RUST_LOG` environment
//! variable; the compact format keeps lines short while structured fields
//! carry the detail.

/// Initializes the global tracing subscriber.
///
/// Safe to call more than once; later calls are no-ops so tests can call it
/// from every test body.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Structured fields carry the context instead of module paths
        .compact()
        .try_init();
}
