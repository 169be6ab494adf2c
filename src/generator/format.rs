//! Display formatting for money, dimensions and roll plans.

use crate::engine::RollPlan;

/// Round to whole cents, half away from zero.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an amount as currency with two decimals and thousands separators.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}.{:02}", sign, symbol, grouped, cents % 100)
}

/// Format inches without trailing zeros, at most two decimals.
pub fn format_inches(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Format a percentage without trailing zeros.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_inches(value))
}

/// Format a window size as whole inches, e.g. `36×48`.
pub fn format_dimensions(width_in: f64, height_in: f64) -> String {
    format!("{}×{}", width_in.round() as i64, height_in.round() as i64)
}

/// One-line summary of a roll plan.
pub fn roll_plan_text(plan: &RollPlan) -> String {
    match plan {
        RollPlan::Planned(cut) => {
            let mut text = format!(
                "{}\" roll, {}, {}\" waste",
                format_inches(cut.base_roll_in),
                cut.orientation,
                format_inches(cut.waste_in)
            );
            if let Some(note) = &cut.note {
                text.push_str(" (");
                text.push_str(note);
                text.push(')');
            }
            text
        }
        RollPlan::Infeasible { error } => format!("Error: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::plan_roll;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(132.0, "$"), "$132.00");
        assert_eq!(format_currency(1234567.891, "$"), "$1,234,567.89");
        assert_eq!(format_currency(-5.5, "$"), "-$5.50");
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
        assert_eq!(format_currency(999.995, "$"), "$1,000.00");
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(26.404), 26.4);
        assert_eq!(round_cents(10.0), 10.0);
    }

    #[test]
    fn test_format_inches() {
        assert_eq!(format_inches(48.0), "48");
        assert_eq!(format_inches(8.5), "8.5");
        assert_eq!(format_inches(0.0), "0");
        assert_eq!(format_inches(0.25), "0.25");
    }

    #[test]
    fn test_format_dimensions() {
        assert_eq!(format_dimensions(36.0, 48.0), "36×48");
        assert_eq!(format_dimensions(35.6, 48.2), "36×48");
    }

    #[test]
    fn test_roll_plan_text() {
        let config = EngineConfig::default();
        insta::assert_snapshot!(
            roll_plan_text(&plan_roll(47.0, 30.0, &config)),
            @r#"48" roll, width across, 0" waste"#
        );
        insta::assert_snapshot!(
            roll_plan_text(&plan_roll(50.0, 59.0, &config)),
            @r#"60" roll, height across, 0" waste (rotated for less waste)"#
        );
        insta::assert_snapshot!(
            roll_plan_text(&plan_roll(80.0, 90.0, &config)),
            @"Error: exceeds maximum roll width"
        );
    }
}
