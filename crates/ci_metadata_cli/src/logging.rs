use tracing_subscriber::EnvFilter;

/// Filter directives for the CLI's logs, e.g. `CI_METADATA_LOG=ci_metadata=debug`.
pub(crate) const LOG_ENV: &str = "CI_METADATA_LOG";

/// Logs go to stderr; stdout stays clean for whatever invoked us.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
