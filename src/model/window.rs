//! Window - A single opening to be filmed.

use crate::config::{IN_PER_FT, SQ_IN_PER_SQ_FT};
use serde::{Deserialize, Serialize};

/// One or more identical openings within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Stable identifier that survives edits.
    pub id: String,
    /// Optional user label, used to key validation messages.
    #[serde(default)]
    pub label: Option<String>,
    /// Nominal width in inches.
    pub width_in: f64,
    /// Nominal height in inches.
    pub height_in: f64,
    /// Pricing width override in inches.
    #[serde(default)]
    pub quote_width_in: Option<f64>,
    /// Pricing height override in inches.
    #[serde(default)]
    pub quote_height_in: Option<f64>,
    /// Number of identical openings. Any JSON number is accepted; only
    /// whole numbers of at least one are usable.
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    /// Extra area billed for waste, as a percentage of the base area.
    #[serde(default)]
    pub waste_factor_percent: f64,
    /// Film override for this window.
    #[serde(default)]
    pub film_id: Option<String>,
    /// Manual sell price per square foot.
    #[serde(default)]
    pub override_sell_per_sqft: Option<f64>,
    /// Fee per square foot for removing existing film.
    #[serde(default)]
    pub film_removal_fee_per_sqft: Option<f64>,
}

fn default_quantity() -> f64 {
    1.0
}

impl Window {
    /// Create a window with nominal dimensions and quantity 1.
    pub fn new(id: impl Into<String>, width_in: f64, height_in: f64) -> Self {
        Self {
            id: id.into(),
            label: None,
            width_in,
            height_in,
            quote_width_in: None,
            quote_height_in: None,
            quantity: 1.0,
            waste_factor_percent: 0.0,
            film_id: None,
            override_sell_per_sqft: None,
            film_removal_fee_per_sqft: None,
        }
    }

    /// Set quantity.
    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = f64::from(quantity);
        self
    }

    /// Set film override.
    pub fn with_film(mut self, film_id: impl Into<String>) -> Self {
        self.film_id = Some(film_id.into());
        self
    }

    /// Set waste factor percent.
    pub fn with_waste(mut self, percent: f64) -> Self {
        self.waste_factor_percent = percent;
        self
    }

    /// Dimensions used for pricing: the quote override if both sides are set.
    pub fn pricing_dimensions(&self) -> (f64, f64) {
        match (self.quote_width_in, self.quote_height_in) {
            (Some(w), Some(h)) => (w, h),
            _ => (self.width_in, self.height_in),
        }
    }

    /// Whether pricing uses override dimensions.
    pub fn has_quote_dimensions(&self) -> bool {
        self.quote_width_in.is_some() && self.quote_height_in.is_some()
    }

    /// Whether the nominal dimensions are positive and finite.
    pub fn has_valid_nominal_dimensions(&self) -> bool {
        is_positive(self.width_in) && is_positive(self.height_in)
    }

    /// Whether the dimensions used for pricing are positive and finite.
    pub fn has_valid_pricing_dimensions(&self) -> bool {
        let (pw, ph) = self.pricing_dimensions();
        is_positive(pw) && is_positive(ph)
    }

    /// Whether nominal and pricing dimensions are both usable.
    pub fn has_valid_dimensions(&self) -> bool {
        self.has_valid_nominal_dimensions() && self.has_valid_pricing_dimensions()
    }

    /// Quantity as a count, if it is a whole number of at least one.
    pub fn whole_quantity(&self) -> Option<i32> {
        let q = self.quantity;
        let usable = q.is_finite() && q.fract() == 0.0 && q >= 1.0 && q <= f64::from(i32::MAX);
        usable.then(|| q as i32)
    }

    /// Whether the quantity is a whole number of at least one.
    pub fn has_valid_quantity(&self) -> bool {
        self.whole_quantity().is_some()
    }

    /// Whether the window counts toward rollups and linear footage:
    /// nominal size and quantity are usable. The pricing override is not consulted.
    pub fn is_countable(&self) -> bool {
        self.has_valid_nominal_dimensions() && self.has_valid_quantity()
    }

    /// Area of a single opening in square feet, from pricing dimensions.
    pub fn area_sqft(&self) -> f64 {
        let (w, h) = self.pricing_dimensions();
        (w * h) / SQ_IN_PER_SQ_FT
    }

    /// Perimeter in linear feet across all openings, from nominal dimensions.
    ///
    /// Waste factor is not applied here.
    pub fn perimeter_linear_feet(&self) -> f64 {
        match self.whole_quantity() {
            Some(qty) if self.has_valid_nominal_dimensions() => {
                f64::from(qty) * 2.0 * (self.width_in + self.height_in) / IN_PER_FT
            }
            _ => 0.0,
        }
    }

    /// Label used in messages, falling back to a positional name.
    pub fn display_label(&self, section_label: &str, position: usize) -> String {
        match self.label.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => format!("{} #{}", section_label, position + 1),
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
