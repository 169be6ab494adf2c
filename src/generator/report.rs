//! Plain-text quote report.

use super::format::{
    format_currency, format_dimensions, format_inches, format_percent, roll_plan_text,
};
use crate::config::EngineConfig;
use crate::engine::{QuoteCalculation, ScenarioSummary, SectionCalculation};
use crate::error::Result;
use std::fmt::Write;

/// Render a calculation as a plain-text report.
pub fn generate_report(
    calc: &QuoteCalculation,
    title: &str,
    config: &EngineConfig,
) -> Result<String> {
    let mut output = String::new();
    let symbol = config.currency_symbol.as_str();

    writeln!(output, "QUOTE: {}", title)?;
    writeln!(output, "{}", "=".repeat(60))?;
    writeln!(output)?;

    for section in &calc.sections {
        write_section(&mut output, section, symbol)?;
    }

    write_size_rollup(&mut output, calc)?;
    write_room_rollup(&mut output, calc)?;

    for summary in &calc.summaries {
        write_summary(&mut output, summary, symbol)?;
    }

    write_issues(&mut output, "ERRORS", &calc.validation_errors)?;
    write_issues(&mut output, "WARNINGS", &calc.validation_warnings)?;

    Ok(output)
}

fn write_section(output: &mut String, section: &SectionCalculation, symbol: &str) -> Result<()> {
    writeln!(output, "[{}]", section.label)?;
    for item in &section.line_items {
        writeln!(
            output,
            "  {:<24} {:>9} x{:<3} {:>9} sqft  {:>12}  {}",
            item.label,
            format_dimensions(item.pricing_width_in, item.pricing_height_in),
            item.quantity,
            format!("{:.2}", item.effective_area_sqft),
            format_currency(item.line_total, symbol),
            item.film_display.as_deref().unwrap_or("-"),
        )?;
        if item.removal_total > 0.0 {
            writeln!(
                output,
                "  {:<24} film removal {}",
                "",
                format_currency(item.removal_total, symbol)
            )?;
        }
    }
    writeln!(
        output,
        "  Section total: {}",
        format_currency(section.section_total, symbol)
    )?;
    writeln!(output)?;
    Ok(())
}

fn write_size_rollup(output: &mut String, calc: &QuoteCalculation) -> Result<()> {
    if calc.window_size_rollup.is_empty() {
        return Ok(());
    }
    writeln!(output, "WINDOW SIZES")?;
    for row in &calc.window_size_rollup {
        writeln!(
            output,
            "  {:>9}  qty {:<4} {:>8} sqft each  {}",
            format_dimensions(row.width_in, row.height_in),
            row.total_qty,
            format!("{:.2}", row.area_sqft_each),
            roll_plan_text(&row.roll_plan),
        )?;
    }
    writeln!(output)?;
    Ok(())
}

fn write_room_rollup(output: &mut String, calc: &QuoteCalculation) -> Result<()> {
    if calc.rooms_summary.is_empty() {
        return Ok(());
    }
    writeln!(output, "ROOMS")?;
    for room in &calc.rooms_summary {
        writeln!(output, "  {} ({})", room.room, room.total_qty)?;
        for size in &room.sizes {
            writeln!(
                output,
                "    {:>9}  qty {}",
                format_dimensions(size.width_in, size.height_in),
                size.total_qty
            )?;
        }
    }
    writeln!(output)?;
    Ok(())
}

fn write_summary(output: &mut String, summary: &ScenarioSummary, symbol: &str) -> Result<()> {
    let money = |amount: f64| format_currency(amount, symbol);

    writeln!(output, "SCENARIO: {}", summary.name)?;
    writeln!(output, "  {:<32} {:>14}", "Windows", money(summary.windows_subtotal))?;
    if summary.materials_unit_price_sell > 0.0 {
        let label = format!(
            "Materials ({} lf x {})",
            format_inches(summary.total_linear_feet_security),
            money(summary.materials_unit_price_sell)
        );
        writeln!(output, "  {:<32} {:>14}", label, money(summary.materials_total))?;
    }
    writeln!(output, "  {:<32} {:>14}", "Subtotal", money(summary.subtotal))?;
    if summary.discount_flat_amount > 0.0 {
        writeln!(
            output,
            "  {:<32} {:>14}",
            "Discount",
            money(-summary.discount_flat_amount)
        )?;
    }
    if summary.discount_percent_amount > 0.0 {
        let label = format!("Discount ({})", format_percent(summary.discount_percent));
        writeln!(
            output,
            "  {:<32} {:>14}",
            label,
            money(-summary.discount_percent_amount)
        )?;
    }
    if summary.travel_fee > 0.0 {
        let label = if summary.travel_taxable {
            "Travel (taxable)"
        } else {
            "Travel"
        };
        writeln!(output, "  {:<32} {:>14}", label, money(summary.travel_fee))?;
    }
    let tax_label = format!("Tax ({})", format_percent(summary.tax_percent));
    writeln!(output, "  {:<32} {:>14}", tax_label, money(summary.tax_amount))?;
    writeln!(output, "  {:<32} {:>14}", "Grand total", money(summary.grand_total))?;
    let deposit_label = format!("Deposit ({})", format_percent(summary.deposit_percent));
    writeln!(output, "  {:<32} {:>14}", deposit_label, money(summary.deposit_due))?;
    writeln!(output)?;
    Ok(())
}

fn write_issues(output: &mut String, heading: &str, issues: &[String]) -> Result<()> {
    if issues.is_empty() {
        return Ok(());
    }
    writeln!(output, "{}", heading)?;
    for issue in issues {
        writeln!(output, "  - {}", issue)?;
    }
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_quote;
    use crate::model::{Film, Material, Quote, Section, Window};

    fn calc() -> QuoteCalculation {
        let films = vec![Film::new("f1", "Clear", 5.0), Film::new("s1", "Shield", 8.0).security()];
        let materials = vec![Material::new("g", "Gasket", 2.0)];
        let mut section = Section::new("sec1");
        section.custom_name = Some("Lobby".into());
        section.add_window(Window::new("w1", 36.0, 48.0).with_quantity(2).with_waste(10.0));
        section.add_window(Window::new("w2", 24.0, 36.0).with_quantity(3).with_film("s1"));
        section.add_window(Window::new("w3", 0.0, 36.0));
        let mut quote = Quote::new("q1");
        quote.global_film_id = Some("f1".into());
        quote.tax_percent = 8.0;
        quote.add_section(section);
        calculate_quote(&quote, &films, &materials, &[], 50.0)
    }

    #[test]
    fn test_report_sections() {
        let report = generate_report(&calc(), "Acme Offices", &EngineConfig::default())
            .expect("report renders");
        assert!(report.starts_with("QUOTE: Acme Offices\n"));
        assert!(report.contains("[Lobby]"));
        assert!(report.contains("$132.00"));
        assert!(report.contains("WINDOW SIZES"));
        assert!(report.contains("48\" roll, width across"));
        assert!(report.contains("ROOMS"));
        assert!(report.contains("  Lobby (5)"));
        assert!(report.contains("SCENARIO: No Materials"));
        assert!(report.contains("SCENARIO: Gasket"));
        assert!(report.contains("Materials (30 lf x $2.00)"));
        assert!(report.contains("ERRORS"));
        assert!(report.contains("Lobby #3: Invalid dimensions (0x36)"));
    }

    #[test]
    fn test_report_without_issues_has_no_error_block() {
        let mut calc = calc();
        calc.validation_errors.clear();
        let report = generate_report(&calc, "Clean", &EngineConfig::default())
            .expect("report renders");
        assert!(!report.contains("ERRORS"));
    }
}
