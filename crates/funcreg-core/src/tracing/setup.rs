//! Log subscriber installation.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Env var holding the log filter directives,
/// e.g. `funcreg_storage=debug,funcreg_core=warn`.
pub const LOG_ENV: &str = "FUNCREG_LOG";

/// Directive used when `FUNCREG_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "funcreg=info";

/// Build the filter from `directives`. Returns the parse error alongside the
/// fallback filter when the directives are rejected.
pub fn build_filter(directives: Option<&str>) -> (EnvFilter, Option<String>) {
    match directives {
        None => (EnvFilter::new(DEFAULT_DIRECTIVE), None),
        Some(d) => match EnvFilter::try_new(d) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(DEFAULT_DIRECTIVE), Some(e.to_string())),
        },
    }
}

/// Install the fmt subscriber once per process. Later calls are no-ops, and
/// a subscriber installed by someone else is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV).ok();
        let (filter, rejected) = build_filter(directives.as_deref());

        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init()
            .is_ok();

        if let Some(reason) = rejected {
            tracing::warn!(
                env = LOG_ENV,
                %reason,
                fallback = DEFAULT_DIRECTIVE,
                "ignoring invalid log filter"
            );
        }
        tracing::debug!(installed, "tracing initialized");
    });
}
