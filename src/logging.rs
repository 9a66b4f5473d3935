use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "episode_player=warn";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `configured`, which wins over [`DEFAULT_FILTER`].
/// Logs go to stderr so they never mix with command output.
pub fn init(configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or(DEFAULT_FILTER)));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
