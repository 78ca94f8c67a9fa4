use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Diagnostics go to stderr so stdout only ever carries the status line.
/// Defaults to `warn` unless RUST_LOG says otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = fmt::Subscriber::builder()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    // Already initialised, e.g. by a test harness
    if let Err(e) = result {
        eprintln!("Warning: logger initialization failed: {}", e);
    }
}
