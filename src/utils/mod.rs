pub mod build_info;
pub mod format;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "moneymind=warn";

/// Initializes the global tracing subscriber. `extra` is an additional
/// `EnvFilter` directive, typically the configured `log_filter`.
pub fn init_tracing(extra: Option<&str>) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        if let Some(directive) = extra.and_then(|raw| raw.parse().ok()) {
            filter = filter.add_directive(directive);
        }

        // Another subscriber may already be installed by an embedding application.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
