use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive. Standard output carries the program's results, so all
/// diagnostics go to standard error.
pub const DEFAULT_FILTER: &str = "elo_dist=info";

/// Installs the global subscriber. Later calls are ignored, which keeps tests that
/// share a process from failing on a second initialization.
pub fn init_logging(directive: &str) {
    let filter = EnvFilter::new(directive);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();
}
