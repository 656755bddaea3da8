use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Filtering follows `RUST_LOG` (default `warn`). Output goes to stderr:
/// stdout carries nothing but the display's control sequences.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}
