use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

static INIT: OnceLock<()> = OnceLock::new();

/// Initialize `tracing` output.
///
/// `RUST_LOG` wins; otherwise `-v` picks the level, then the configured
/// fallback, then `info`.
pub fn init(verbose: u8, fallback: Option<&str>) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, fallback)));
        let subscriber = Registry::default()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr));
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            // Ignore error if a subscriber is already set (e.g., tests).
        }
    });
}

fn default_directive(verbose: u8, fallback: Option<&str>) -> String {
    match verbose {
        0 => fallback.unwrap_or("info").to_owned(),
        1 => "debug".to_owned(),
        _ => "trace".to_owned(),
    }
}
