//! Validation of quote data.

mod validate;

pub use validate::{validate_quote_terms, validate_window, QuoteTerms, ValidationResult};
