//! Configuration constants and settings for the quote engine.

use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Cross-trim allowance added to each side of the slit width, in inches.
pub const CROSS_TRIM_IN: f64 = 0.5;

/// Square inches per square foot.
pub const SQ_IN_PER_SQ_FT: f64 = 144.0;

/// Inches per linear foot.
pub const IN_PER_FT: f64 = 12.0;

/// Roll widths stocked by default, in inches.
pub const DEFAULT_ROLL_WIDTHS_IN: [f64; 3] = [48.0, 60.0, 72.0];

/// Deposit percent used when the quote does not carry its own.
pub const DEFAULT_DEPOSIT_PERCENT: f64 = 50.0;

/// Currency symbol used at presentation time.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Label for sections that resolve to no room name.
pub const UNASSIGNED_ROOM: &str = "Unassigned";

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Supported base roll widths in inches, ascending.
    pub roll_widths_in: Vec<f64>,
    /// Trim allowance per side in inches.
    pub cross_trim_in: f64,
    /// Deposit percent applied when the quote has none.
    pub default_deposit_percent: f64,
    /// Currency symbol for formatted output.
    pub currency_symbol: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            roll_widths_in: DEFAULT_ROLL_WIDTHS_IN.to_vec(),
            cross_trim_in: CROSS_TRIM_IN,
            default_deposit_percent: DEFAULT_DEPOSIT_PERCENT,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the given roll widths.
    pub fn with_roll_widths(roll_widths_in: impl IntoIterator<Item = f64>) -> Self {
        let mut config = Self {
            roll_widths_in: roll_widths_in.into_iter().collect(),
            ..Default::default()
        };
        config.normalize();
        config
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuoteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let mut config: EngineConfig =
            serde_json::from_str(&content).map_err(|source| QuoteError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        config.normalize();
        tracing::debug!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Sort roll widths ascending and drop non-positive and duplicate entries.
    pub fn normalize(&mut self) {
        self.roll_widths_in.retain(|w| w.is_finite() && *w > 0.0);
        self.roll_widths_in.sort_by(|a, b| a.total_cmp(b));
        self.roll_widths_in.dedup_by(|a, b| float_cmp::approx_eq(*a, *b));
        if self.cross_trim_in < 0.0 {
            self.cross_trim_in = 0.0;
        }
    }

    /// Widest supported roll, if any.
    pub fn max_roll_width(&self) -> Option<f64> {
        self.roll_widths_in.last().copied()
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if `a >= b` with epsilon tolerance.
    #[inline]
    pub fn approx_ge(a: f64, b: f64) -> bool {
        a >= b - EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.roll_widths_in, vec![48.0, 60.0, 72.0]);
        assert_eq!(config.cross_trim_in, 0.5);
        assert_eq!(config.max_roll_width(), Some(72.0));
    }

    #[test]
    fn test_with_roll_widths_normalizes() {
        let config = EngineConfig::with_roll_widths([72.0, 36.0, 72.0, -1.0, 60.0]);
        assert_eq!(config.roll_widths_in, vec![36.0, 60.0, 72.0]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/engine.json")).unwrap_err();
        assert!(matches!(err, QuoteError::FileNotFound { .. }));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"default_deposit_percent": 25}"#)
            .expect("valid config json");
        assert_eq!(config.default_deposit_percent, 25.0);
        assert_eq!(config.roll_widths_in, vec![48.0, 60.0, 72.0]);
    }

    #[test]
    fn test_approx_ge() {
        assert!(float_cmp::approx_ge(48.0, 48.00001));
        assert!(!float_cmp::approx_ge(47.9, 48.0));
    }
}
