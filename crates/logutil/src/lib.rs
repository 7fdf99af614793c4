//! Utilities for logging.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    HumanReadable,
    Json,
    Compact,
}

/// Configure the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when set. Calling this
/// more than once has no effect after the first successful call.
pub fn configure_global_logger<W>(default_level: Level, format: LogFormat, writer: W)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    let _ = match format {
        LogFormat::HumanReadable => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}

/// Configure logging for tests, output is captured by the test harness.
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}
