// Small shared helpers: number formatting for console output and the
// tracing subscriber setup.
use num_format::{Locale, ToFormattedString};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_LOG_FILTER: &str = "accident_report=warn";

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thousands separators for vehicle counts (e.g. `12,345 Fahrzeuge`).
    n.to_formatted_string(&Locale::en)
}

/// Install the global subscriber. Diagnostics go to stderr so they never
/// interleave with report text on stdout. `RUST_LOG` overrides the filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
