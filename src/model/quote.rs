//! Quote - Root aggregate holding pricing terms and sections.

use super::Section;
use serde::{Deserialize, Serialize};

/// A customer quote. Calculation never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub id: String,
    /// Customer or job name.
    pub name: String,
    /// Film used when neither window nor section overrides it.
    pub global_film_id: Option<String>,
    /// Flat discount in currency units.
    pub discount_flat: f64,
    /// Percent discount applied after the flat discount.
    pub discount_percent: f64,
    pub tax_percent: f64,
    pub travel_fee: f64,
    /// Whether the travel fee is part of the taxable base.
    pub travel_taxable: bool,
    /// Deposit percent; the engine default applies when absent.
    pub deposit_percent: Option<f64>,
    pub sections: Vec<Section>,
}

impl Quote {
    /// Create an empty quote.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Add a section.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Total quantity of openings across all sections.
    pub fn total_quantity(&self) -> i64 {
        self.sections.iter().map(Section::total_quantity).sum()
    }

    /// Deposit percent to use, falling back to `default`.
    pub fn effective_deposit_percent(&self, default: f64) -> f64 {
        self.deposit_percent.unwrap_or(default)
    }
}
