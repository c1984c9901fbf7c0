use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global tracing subscriber, filtered by `RUST_LOG`.
pub fn subscriber() {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Loads a `.env` file from the working directory or one of its parents, if there is one.
///
/// Runs before the subscriber is installed so `RUST_LOG` can be set there.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}
