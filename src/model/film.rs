//! Film - Catalog entry for a window film product.

use serde::{Deserialize, Serialize};

/// A film product sold per square foot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    /// Catalog identifier.
    pub id: String,
    /// Manufacturer, e.g. "3M".
    #[serde(default)]
    pub brand: String,
    /// Product line within the brand.
    #[serde(default)]
    pub series: String,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Visible light transmission percent.
    #[serde(default)]
    pub vlt: Option<f64>,
    /// Cost per square foot.
    #[serde(default)]
    pub cost_per_sqft: f64,
    /// Sell price per square foot.
    #[serde(default)]
    pub sell_per_sqft: f64,
    /// Security films are billed linear-foot materials (gasket, caulk).
    #[serde(default)]
    pub security_film: bool,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl Film {
    /// Create an active, non-security film with the given sell price.
    pub fn new(id: impl Into<String>, name: impl Into<String>, sell_per_sqft: f64) -> Self {
        Self {
            id: id.into(),
            brand: String::new(),
            series: String::new(),
            name: name.into(),
            vlt: None,
            cost_per_sqft: 0.0,
            sell_per_sqft,
            security_film: false,
            active: true,
        }
    }

    /// Mark this film as a security film.
    pub fn security(mut self) -> Self {
        self.security_film = true;
        self
    }

    /// Human-readable name: brand, series and name, then VLT when known.
    pub fn display_name(&self) -> String {
        let mut parts: Vec<&str> = [self.brand.as_str(), self.series.as_str(), self.name.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        parts.dedup();
        let mut out = if parts.is_empty() {
            self.id.clone()
        } else {
            parts.join(" ")
        };
        if let Some(vlt) = self.vlt {
            out.push_str(&format!(" ({}% VLT)", vlt));
        }
        out
    }
}
