//! Tracing subscriber setup

use cm_shared::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = fmt().with_env_filter(env_filter);

    // a second init (tests, embedding) keeps the first subscriber
    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}
