use tracing_subscriber::EnvFilter;

/// Used when RUST_LOG is not set or cannot be parsed.
const DEFAULT_FILTER: &str = "error,echo_lambda=info";

/// Initializes the tracing from RUST_LOG env var if present or sets minimal logging:
/// - INFO for this lambda
/// - ERROR for everything else, so the runtime's own errors still reach CloudWatch
///
/// CloudWatch timestamps every line, so the time and colour codes are left out.
/// Only the first call has any effect.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // fails if a global subscriber is already set, which is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .compact()
        .try_init();
}
