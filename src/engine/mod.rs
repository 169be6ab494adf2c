//! Quote calculation pipeline.
//!
//! Film resolution per window, line item pricing, size rollups with roll
//! plans, then one financial summary per material scenario. Pure: the same
//! inputs always give the same result and nothing is mutated.

mod line_item;
mod resolve;
mod rollcut;
mod rollup;
mod totals;

pub use line_item::{calculate_line_item, LineItem, PriceSource, PricingContext};
pub use resolve::{resolve_film, resolve_film_detailed, FilmSource, Resolution};
pub use rollcut::{plan_roll, Orientation, RollCut, RollPlan, EXCEEDS_MAX_ROLL, INVALID_DIMENSIONS};
pub use rollup::{
    compare_rooms, film_size_rollup, room_rollup, window_size_rollup, FilmSizeRollupRow,
    RollPlanCache, RoomRollup, SizeKey, SizeRollupRow,
};
pub use totals::{
    compute_summaries, compute_summary, material_policies, MaterialPolicy, ScenarioSummary,
    NO_MATERIALS_SCENARIO, STANDARD_SCENARIO,
};

use crate::config::EngineConfig;
use crate::model::{Film, Material, Quote, Room};
use crate::validation::{validate_quote_terms, ValidationResult};
use serde::{Deserialize, Serialize};

/// Priced section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCalculation {
    pub section_id: String,
    /// Resolved room label.
    pub label: String,
    pub line_items: Vec<LineItem>,
    /// Sum of film totals.
    pub windows_total: f64,
    pub removal_total: f64,
    /// Sum of line totals, removal included.
    pub section_total: f64,
    pub total_qty: i64,
}

/// Complete result of a quote calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteCalculation {
    pub quote_id: String,
    pub sections: Vec<SectionCalculation>,
    pub summaries: Vec<ScenarioSummary>,
    pub window_size_rollup: Vec<SizeRollupRow>,
    pub rooms_summary: Vec<RoomRollup>,
    pub film_size_rollup: Vec<FilmSizeRollupRow>,
    pub total_linear_feet_security: f64,
    pub validation_errors: Vec<String>,
    pub validation_warnings: Vec<String>,
}

impl QuoteCalculation {
    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }

    /// All line items in section order.
    pub fn line_items(&self) -> impl Iterator<Item = &LineItem> {
        self.sections.iter().flat_map(|s| s.line_items.iter())
    }

    /// Sum of every section total.
    pub fn windows_subtotal(&self) -> f64 {
        self.sections.iter().map(|s| s.section_total).sum()
    }

    /// Scenario by name.
    pub fn summary(&self, name: &str) -> Option<&ScenarioSummary> {
        self.summaries.iter().find(|s| s.name == name)
    }
}

/// Calculate a quote with the default engine configuration.
pub fn calculate_quote(
    quote: &Quote,
    films: &[Film],
    materials: &[Material],
    rooms: &[Room],
    deposit_percent: f64,
) -> QuoteCalculation {
    calculate_quote_with_config(
        quote,
        films,
        materials,
        rooms,
        deposit_percent,
        &EngineConfig::default(),
    )
}

/// Calculate a quote.
///
/// Never fails: problems with the quote's data are reported in
/// `validation_errors` and the affected lines price at zero.
pub fn calculate_quote_with_config(
    quote: &Quote,
    films: &[Film],
    materials: &[Material],
    rooms: &[Room],
    deposit_percent: f64,
    config: &EngineConfig,
) -> QuoteCalculation {
    let mut validation = ValidationResult::ok();
    let ctx = PricingContext::new(films, quote.global_film_id.as_deref());

    let sections: Vec<SectionCalculation> = quote
        .sections
        .iter()
        .map(|section| {
            let label = section.room_label(rooms);
            let line_items: Vec<LineItem> = section
                .windows
                .iter()
                .enumerate()
                .map(|(position, window)| {
                    let (item, result) =
                        calculate_line_item(window, section, &label, position, &ctx);
                    validation.merge(result);
                    item
                })
                .collect();

            SectionCalculation {
                section_id: section.id.clone(),
                windows_total: line_items.iter().map(|i| i.film_total).sum(),
                removal_total: line_items.iter().map(|i| i.removal_total).sum(),
                section_total: line_items.iter().map(|i| i.line_total).sum(),
                total_qty: line_items
                    .iter()
                    .filter(|i| i.valid)
                    .map(|i| i64::from(i.quantity))
                    .sum(),
                label,
                line_items,
            }
        })
        .collect();

    let items: Vec<LineItem> = sections
        .iter()
        .flat_map(|s| s.line_items.iter().cloned())
        .collect();

    let mut plans = RollPlanCache::new(config);
    let window_rows = window_size_rollup(&items, &mut plans);
    let rooms_summary = room_rollup(&items, &mut plans);
    let film_rows = film_size_rollup(&items, &mut plans);

    let windows_subtotal: f64 = items.iter().map(|i| i.line_total).sum();
    let has_security = items.iter().any(|i| i.is_security && i.valid);
    let total_linear_feet_security: f64 = items
        .iter()
        .filter(|i| i.is_security)
        .map(|i| i.linear_feet)
        .sum();

    let (terms, terms_validation) = validate_quote_terms(quote, deposit_percent);
    validation.merge(terms_validation);

    let summaries = compute_summaries(
        materials,
        windows_subtotal,
        total_linear_feet_security,
        has_security,
        &terms,
    );

    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(
        "Quote {}: {} windows, {} sizes, {} scenario(s), {} error(s)",
        quote.id,
        items.len(),
        plans.len(),
        summaries.len(),
        validation.errors.len()
    );

    QuoteCalculation {
        quote_id: quote.id.clone(),
        sections,
        summaries,
        window_size_rollup: window_rows,
        rooms_summary,
        film_size_rollup: film_rows,
        total_linear_feet_security,
        validation_errors: validation.errors,
        validation_warnings: validation.warnings,
    }
}
