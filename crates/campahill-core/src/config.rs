//! Site Configuration
//!
//! Tunables read once at startup. Every field has a default, so an absent
//! or partial configuration block is valid.

use serde::Deserialize;

use crate::error::{Result, SiteError};
use crate::scroll::DEFAULT_SCROLL_THRESHOLD_PX;

/// Site configuration
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Vertical offset (px) past which the navigation bar turns opaque
    pub scroll_threshold_px: f64,

    /// Animate navigation scrolls instead of jumping
    pub smooth_scroll: bool,

    /// `tracing` filter directive (e.g. "info", "campahill_core=debug")
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            smooth_scroll: true,
            log_filter: "info".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON configuration block, filling omitted fields from defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(SiteError::Config(format!(
                "scroll_threshold_px must be a non-negative number, got {}",
                self.scroll_threshold_px
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert!((config.scroll_threshold_px - 50.0).abs() < f64::EPSILON);
        assert!(config.smooth_scroll);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "smooth_scroll": false }"#).unwrap();
        assert_eq!(
            config,
            SiteConfig {
                smooth_scroll: false,
                ..SiteConfig::default()
            }
        );
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = SiteConfig::from_json("{ scroll_threshold_px: ").unwrap_err();
        assert!(matches!(err, SiteError::Json(_)));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = SiteConfig::from_json(r#"{ "scroll_threshold_px": -1 }"#).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }
}
