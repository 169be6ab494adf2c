//! Presentation: number formatting and the plain-text quote report.

mod format;
mod report;

pub use format::{
    format_currency, format_dimensions, format_inches, format_percent, roll_plan_text, round_cents,
};
pub use report::generate_report;
