//! Browser Console Logging
//!
//! `tracing` events go to the devtools console through `tracing-wasm`,
//! filtered by the configured directive.

use tracing_subscriber::{
    EnvFilter, filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt,
};
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Filter used when the configured directive does not parse
const FALLBACK_FILTER: &str = "info";

/// Parse `directive`, falling back to [`FALLBACK_FILTER`] and handing back
/// the parse error so it can be reported once logging is up.
pub fn parse_filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_FILTER), Some(e)),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(directive: &str) {
    let (filter, rejected) = parse_filter(directive);

    // Level selection is left to the filter; the console layer passes everything.
    let console = WASMLayerConfigBuilder::new()
        .set_max_level(tracing::Level::TRACE)
        .set_report_logs_in_timings(false)
        .build();

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(WASMLayer::new(console))
        .try_init()
        .is_ok();

    if let Some(e) = rejected {
        tracing::warn!(error = %e, "invalid log filter, using {FALLBACK_FILTER}");
    }
    if installed {
        tracing::debug!("console logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_valid_directive_is_kept() {
        let (filter, rejected) = parse_filter("debug");
        assert!(rejected.is_none());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_invalid_directive_falls_back_to_info() {
        let (filter, rejected) = parse_filter("campahill_core=loud");
        assert!(rejected.is_some());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
