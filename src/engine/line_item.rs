//! Per-window line item pricing.

use super::resolve::{resolve_film_detailed, FilmSource};
use crate::model::{Film, Section, Window};
use crate::validation::{validate_window, ValidationResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where a line's sell price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    WindowOverride,
    Film,
    None,
}

/// Priced window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub window_id: String,
    pub label: String,
    /// Room label of the owning section.
    pub room: String,
    /// Nominal width in inches.
    pub width_in: f64,
    /// Nominal height in inches.
    pub height_in: f64,
    pub pricing_width_in: f64,
    pub pricing_height_in: f64,
    pub quantity: i32,
    /// Waste factor actually applied.
    pub waste_factor_percent: f64,
    /// Area of one opening, from pricing dimensions.
    pub area_sqft: f64,
    /// Area across all openings with waste applied.
    pub effective_area_sqft: f64,
    pub film_id: Option<String>,
    pub film_display: Option<String>,
    pub film_source: Option<FilmSource>,
    pub is_security: bool,
    pub sell_per_sqft: f64,
    pub price_source: PriceSource,
    /// Effective area times sell price.
    pub film_total: f64,
    pub removal_fee_per_sqft: f64,
    pub removal_total: f64,
    /// Film total plus removal total.
    pub line_total: f64,
    /// Perimeter footage across all openings, from nominal dimensions.
    pub linear_feet: f64,
    /// Nominal dimensions and quantity are usable for rollups and linear feet.
    pub valid: bool,
    /// Pricing dimensions are usable; when false, area and price are zero.
    pub priceable: bool,
}

/// Inputs shared by every window in a quote.
#[derive(Debug, Clone)]
pub struct PricingContext<'a> {
    pub films: HashMap<&'a str, &'a Film>,
    pub global_film_id: Option<&'a str>,
}

impl<'a> PricingContext<'a> {
    pub fn new(films: &'a [Film], global_film_id: Option<&'a str>) -> Self {
        Self {
            films: crate::catalog::film_index(films),
            global_film_id,
        }
    }
}

/// Replace negative or non-finite values with zero.
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Price one window. Validation problems are returned, never raised.
pub fn calculate_line_item(
    window: &Window,
    section: &Section,
    room: &str,
    position: usize,
    ctx: &PricingContext<'_>,
) -> (LineItem, ValidationResult) {
    let label = window.display_label(room, position);
    let resolution = resolve_film_detailed(
        window,
        section.film_id.as_deref(),
        ctx.global_film_id,
        &ctx.films,
    );
    let validation = validate_window(window, &label, &resolution);
    let film = resolution.film();

    let valid = window.is_countable();
    let priceable = window.has_valid_pricing_dimensions();
    let quantity = window.whole_quantity().unwrap_or(0);
    let waste_factor_percent = non_negative(window.waste_factor_percent);
    let (pricing_width_in, pricing_height_in) = window.pricing_dimensions();

    let linear_feet = if valid { window.perimeter_linear_feet() } else { 0.0 };
    let (area_sqft, effective_area_sqft) = if valid && priceable {
        let area = window.area_sqft();
        let effective = area * f64::from(quantity) * (1.0 + waste_factor_percent / 100.0);
        (area, effective)
    } else {
        (0.0, 0.0)
    };

    let (sell_per_sqft, price_source) = match (window.override_sell_per_sqft, film) {
        (Some(price), _) => (non_negative(price), PriceSource::WindowOverride),
        (None, Some(film)) => (film.sell_per_sqft, PriceSource::Film),
        (None, None) => (0.0, PriceSource::None),
    };

    let removal_fee_per_sqft = window.film_removal_fee_per_sqft.map(non_negative).unwrap_or(0.0);
    let film_total = effective_area_sqft * sell_per_sqft;
    let removal_total = effective_area_sqft * removal_fee_per_sqft;

    tracing::debug!(
        "{}: {:.4} sqft effective at {} ({:?}) = {:.4}",
        label,
        effective_area_sqft,
        sell_per_sqft,
        price_source,
        film_total + removal_total
    );

    let item = LineItem {
        window_id: window.id.clone(),
        label,
        room: room.to_string(),
        width_in: window.width_in,
        height_in: window.height_in,
        pricing_width_in,
        pricing_height_in,
        quantity,
        waste_factor_percent,
        area_sqft,
        effective_area_sqft,
        film_id: film.map(|f| f.id.clone()),
        film_display: film.map(Film::display_name),
        film_source: resolution.source(),
        is_security: film.is_some_and(|f| f.security_film),
        sell_per_sqft,
        price_source,
        film_total,
        removal_fee_per_sqft,
        removal_total,
        line_total: film_total + removal_total,
        linear_feet,
        valid,
        priceable,
    };

    (item, validation)
}
