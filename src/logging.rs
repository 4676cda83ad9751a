use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set, otherwise warnings and errors only.
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
}

/// Same defaults as [`env_filter`], but from an explicit directive string.
pub fn filter_from(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

/// Install the stderr subscriber used by the command-line tools.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
