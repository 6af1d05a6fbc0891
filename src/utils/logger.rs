use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber described by the `[logging]` section.
/// `RUST_LOG` overrides the configured level; `verbose` forces `debug`.
pub fn init_logger(logging: &LoggingConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(logging, verbose)));
    let layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);
    let subscriber = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        subscriber.with(layer.json().flatten_event(true)).init();
    } else {
        subscriber.with(layer.compact()).init();
    }
}

/// Our own target at the configured level, dependencies at `warn`.
fn filter_directive(logging: &LoggingConfig, verbose: bool) -> String {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    format!("warn,contact_converter={}", level)
}
