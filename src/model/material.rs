//! Material - Linear-foot consumables billed with security film.

use serde::{Deserialize, Serialize};

/// A consumable sold per linear foot (gasket, caulk).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Catalog identifier.
    pub id: String,
    /// Display name, also used to label scenarios.
    pub name: String,
    /// Cost per linear foot.
    #[serde(default)]
    pub cost_per_lf: f64,
    /// Sell price per linear foot.
    #[serde(default)]
    pub sell_per_lf: f64,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl Material {
    /// Create an active material with the given sell price.
    pub fn new(id: impl Into<String>, name: impl Into<String>, sell_per_lf: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost_per_lf: 0.0,
            sell_per_lf,
            active: true,
        }
    }
}
