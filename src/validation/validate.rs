//! Validation logic for windows and quote pricing terms.
//!
//! Nothing here aborts a calculation. Problems are collected as messages and
//! the offending values are replaced with safe ones by the caller.

use crate::engine::Resolution;
use crate::model::{Quote, Window};
use serde::{Deserialize, Serialize};

/// Validation result with warnings.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate one window against its film resolution.
///
/// `label` keys every message.
pub fn validate_window(window: &Window, label: &str, resolution: &Resolution<'_>) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !window.has_valid_dimensions() {
        let (pw, ph) = window.pricing_dimensions();
        if window.has_quote_dimensions() {
            result.add_error(format!(
                "{}: Invalid dimensions ({}x{}, quoted {}x{})",
                label, window.width_in, window.height_in, pw, ph
            ));
        } else {
            result.add_error(format!(
                "{}: Invalid dimensions ({}x{})",
                label, window.width_in, window.height_in
            ));
        }
    }

    if !window.has_valid_quantity() {
        result.add_error(format!(
            "{}: Invalid quantity ({})",
            label, window.quantity
        ));
    }

    if window.waste_factor_percent < 0.0 || !window.waste_factor_percent.is_finite() {
        result.add_error(format!(
            "{}: Invalid waste factor ({}%), using 0%",
            label, window.waste_factor_percent
        ));
    }

    if let Some(price) = window.override_sell_per_sqft {
        if price < 0.0 || !price.is_finite() {
            result.add_error(format!("{}: Invalid price override ({})", label, price));
        }
    }

    if let Some(fee) = window.film_removal_fee_per_sqft {
        if fee < 0.0 || !fee.is_finite() {
            result.add_error(format!("{}: Invalid film removal fee ({})", label, fee));
        }
    }

    for (source, id) in &resolution.missing {
        result.add_warning(format!(
            "{}: Film {} ({}) not found in catalog",
            label, id, source
        ));
    }

    if resolution.film.is_none() && window.override_sell_per_sqft.is_none() {
        result.add_error(format!("{}: No film selected and no price override", label));
    }

    result
}

/// Pricing terms after validation, with invalid values replaced by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteTerms {
    pub discount_flat: f64,
    pub discount_percent: f64,
    pub tax_percent: f64,
    pub travel_fee: f64,
    pub travel_taxable: bool,
    pub deposit_percent: f64,
}

/// Validate a quote's pricing terms.
pub fn validate_quote_terms(quote: &Quote, deposit_percent: f64) -> (QuoteTerms, ValidationResult) {
    let mut result = ValidationResult::ok();

    let mut checked = |name: &str, value: f64| -> f64 {
        if value < 0.0 || !value.is_finite() {
            result.add_error(format!("Quote: Invalid {} ({}), using 0", name, value));
            0.0
        } else {
            value
        }
    };

    let terms = QuoteTerms {
        discount_flat: checked("flat discount", quote.discount_flat),
        discount_percent: checked("discount percent", quote.discount_percent),
        tax_percent: checked("tax percent", quote.tax_percent),
        travel_fee: checked("travel fee", quote.travel_fee),
        travel_taxable: quote.travel_taxable,
        deposit_percent: checked("deposit percent", deposit_percent),
    };

    (terms, result)
}
