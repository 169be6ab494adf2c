//! tint-quote - Quote pricing and material rollup engine for window tint jobs.
//!
//! Turns a tree of sections and windows plus film and material catalogs into
//! priced line items, window size rollups with roll-cutting plans, and one
//! financial summary per material scenario.
//!
//! # Example
//!
//! ```
//! use tint_quote::{calculate_quote, Film, Quote, Section, Window};
//!
//! let films = vec![Film::new("clear", "Clear 70", 5.0)];
//! let mut section = Section::new("s1");
//! section.add_window(Window::new("w1", 36.0, 48.0).with_quantity(2).with_waste(10.0));
//! let mut quote = Quote::new("q1");
//! quote.global_film_id = Some("clear".into());
//! quote.add_section(section);
//!
//! let calc = calculate_quote(&quote, &films, &[], &[], 50.0);
//! assert!((calc.summaries[0].windows_subtotal - 132.0).abs() < 1e-9);
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod model;
pub mod store;
pub mod validation;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogSnapshot};
pub use config::EngineConfig;
pub use engine::{
    calculate_quote, calculate_quote_with_config, plan_roll, resolve_film, QuoteCalculation,
    RollPlan, ScenarioSummary,
};
pub use error::{QuoteError, Result};
pub use generator::generate_report;
pub use model::{Film, Material, Quote, Room, Section, Window};
pub use store::{load_quote_file, JsonQuoteStore, QuoteStore};
pub use validation::ValidationResult;

use std::path::Path;

/// Calculate a quote stored in a JSON file against a JSON catalog.
///
/// The deposit percent is `deposit_override` if given, else the quote's own,
/// else the configured default.
pub fn calculate_quote_files(
    quote_path: &Path,
    catalog_path: &Path,
    config: &EngineConfig,
    deposit_override: Option<f64>,
) -> Result<(Quote, QuoteCalculation)> {
    let quote = load_quote_file(quote_path)?;
    let catalog = CatalogSnapshot::load(catalog_path)?;

    let deposit_percent = deposit_override
        .unwrap_or_else(|| quote.effective_deposit_percent(config.default_deposit_percent));

    // Retired films still price existing quotes; retired materials never do.
    let calc = calculate_quote_with_config(
        &quote,
        &catalog.get_films(false),
        &catalog.get_materials(true),
        &catalog.get_rooms(),
        deposit_percent,
        config,
    );
    Ok((quote, calc))
}
