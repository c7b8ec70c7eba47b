use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber for the composing application.
///
/// Honors `RUST_LOG`, falling back to `info`. Returns an error if a global
/// subscriber was already installed.
pub fn init_tracing() -> Result<(), String> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}
