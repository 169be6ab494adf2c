//! Room - Catalog entry naming an area of a building.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A named room. Usage rank only orders suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    /// Frequently used rooms are suggested first.
    #[serde(default)]
    pub common: bool,
    /// Number of times the room has been picked.
    #[serde(default)]
    pub usage_rank: u32,
}

impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            common: false,
            usage_rank: 0,
        }
    }
}

/// Compare names case-insensitively, ordering digit runs by numeric value
/// so "Bedroom 2" sorts before "Bedroom 10".
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();

    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let da = take_digits(&mut ai);
                let db = take_digits(&mut bi);
                let ord = compare_digit_runs(&da, &db);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(ca), Some(cb)) => {
                let ord = ca.to_lowercase().cmp(cb.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                ai.next();
                bi.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_cmp_numbers() {
        assert_eq!(natural_cmp("Bedroom 2", "Bedroom 10"), Ordering::Less);
        assert_eq!(natural_cmp("Bedroom 10", "Bedroom 9"), Ordering::Greater);
    }

    #[test]
    fn test_natural_cmp_case_insensitive() {
        assert_eq!(natural_cmp("attic", "Basement"), Ordering::Less);
        assert_eq!(natural_cmp("Office", "office"), "Office".cmp("office"));
    }

    #[test]
    fn test_natural_cmp_prefix() {
        assert_eq!(natural_cmp("Den", "Den 2"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_leading_zeros() {
        assert_eq!(natural_cmp("Unit 007", "Unit 7"), "Unit 007".cmp("Unit 7"));
        assert_eq!(natural_cmp("Unit 007", "Unit 8"), Ordering::Less);
    }
}
