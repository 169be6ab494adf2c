//! Scenario totals: subtotal, discounts, tax, grand total and deposit.
//!
//! Amounts stay unrounded here; rounding happens only when formatting.

use crate::model::Material;
use crate::validation::QuoteTerms;
use serde::{Deserialize, Serialize};

/// Name of the single scenario for quotes without security film.
pub const STANDARD_SCENARIO: &str = "Standard";

/// Name of the security scenario that bills no materials.
pub const NO_MATERIALS_SCENARIO: &str = "No Materials";

/// Which materials a scenario bills per linear foot of security film.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPolicy {
    pub name: String,
    pub material_ids: Vec<String>,
    /// Summed sell price per linear foot of the selected materials.
    pub unit_price_sell: f64,
}

impl MaterialPolicy {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            material_ids: Vec::new(),
            unit_price_sell: 0.0,
        }
    }

    fn from_materials(materials: &[&Material]) -> Self {
        Self {
            name: materials
                .iter()
                .map(|m| m.name.as_str())
                .collect::<Vec<_>>()
                .join("+"),
            material_ids: materials.iter().map(|m| m.id.clone()).collect(),
            unit_price_sell: materials.iter().map(|m| m.sell_per_lf).sum(),
        }
    }
}

/// Scenarios to price.
///
/// Without security film there is one standard scenario. With it: no
/// materials, each active material alone, then all active materials
/// together when there are at least two.
pub fn material_policies(materials: &[Material], has_security: bool) -> Vec<MaterialPolicy> {
    if !has_security {
        return vec![MaterialPolicy::empty(STANDARD_SCENARIO)];
    }

    let active: Vec<&Material> = materials.iter().filter(|m| m.active).collect();
    let mut policies = vec![MaterialPolicy::empty(NO_MATERIALS_SCENARIO)];
    policies.extend(active.iter().map(|m| MaterialPolicy::from_materials(&[*m])));
    if active.len() > 1 {
        policies.push(MaterialPolicy::from_materials(&active));
    }
    policies
}

/// Financial summary for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub material_ids: Vec<String>,
    pub windows_subtotal: f64,
    pub total_linear_feet_security: f64,
    pub materials_unit_price_sell: f64,
    pub materials_total: f64,
    pub subtotal: f64,
    pub discount_flat_amount: f64,
    pub subtotal_after_flat: f64,
    pub discount_percent: f64,
    pub discount_percent_amount: f64,
    pub subtotal_after_discounts: f64,
    pub travel_fee: f64,
    pub travel_taxable: bool,
    pub taxable_base: f64,
    pub tax_percent: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
    pub deposit_percent: f64,
    pub deposit_due: f64,
}

/// Price one scenario.
///
/// The flat discount comes off before the percent discount and never
/// exceeds the subtotal.
pub fn compute_summary(
    policy: &MaterialPolicy,
    windows_subtotal: f64,
    total_linear_feet_security: f64,
    terms: &QuoteTerms,
) -> ScenarioSummary {
    let materials_total = total_linear_feet_security * policy.unit_price_sell;
    let subtotal = windows_subtotal + materials_total;

    let discount_flat_amount = terms.discount_flat.min(subtotal).max(0.0);
    let subtotal_after_flat = subtotal - discount_flat_amount;

    let discount_percent_amount = subtotal_after_flat * (terms.discount_percent / 100.0);
    let subtotal_after_discounts = subtotal_after_flat - discount_percent_amount;

    let taxable_base = if terms.travel_taxable {
        subtotal_after_discounts + terms.travel_fee
    } else {
        subtotal_after_discounts
    };
    let tax_amount = taxable_base * (terms.tax_percent / 100.0);
    let grand_total = subtotal_after_discounts + terms.travel_fee + tax_amount;
    let deposit_due = grand_total * (terms.deposit_percent / 100.0);

    ScenarioSummary {
        name: policy.name.clone(),
        material_ids: policy.material_ids.clone(),
        windows_subtotal,
        total_linear_feet_security,
        materials_unit_price_sell: policy.unit_price_sell,
        materials_total,
        subtotal,
        discount_flat_amount,
        subtotal_after_flat,
        discount_percent: terms.discount_percent,
        discount_percent_amount,
        subtotal_after_discounts,
        travel_fee: terms.travel_fee,
        travel_taxable: terms.travel_taxable,
        taxable_base,
        tax_percent: terms.tax_percent,
        tax_amount,
        grand_total,
        deposit_percent: terms.deposit_percent,
        deposit_due,
    }
}

/// Price every scenario.
pub fn compute_summaries(
    materials: &[Material],
    windows_subtotal: f64,
    total_linear_feet_security: f64,
    has_security: bool,
    terms: &QuoteTerms,
) -> Vec<ScenarioSummary> {
    material_policies(materials, has_security)
        .iter()
        .map(|policy| {
            compute_summary(policy, windows_subtotal, total_linear_feet_security, terms)
        })
        .collect()
}
