use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` wins over `log_level` when set.
pub fn configure_logger(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},tower_http=debug")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
