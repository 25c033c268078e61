use serde::{Deserialize, Serialize};

use crate::money;

/// Aggregate order totals as returned by the order service, in minor
/// currency units. Every field defaults to zero, so an empty response
/// object decodes to an all-zero summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentSummary {
    pub total_items: u32,
    pub price_cost_cents: i64,
    pub shipping_cost_cents: i64,
    pub total_cost_before_cents: i64,
    pub tax_cents: i64,
    pub total_cost_cents: i64,
}

// Major-unit views of the cents fields. Derived on access, never stored;
// rounding happens only at display time in `money::format_money`.
impl PaymentSummary {
    pub fn price_cost_kshs(&self) -> f64 {
        money::to_major_units(self.price_cost_cents)
    }

    pub fn shipping_cost_kshs(&self) -> f64 {
        money::to_major_units(self.shipping_cost_cents)
    }

    pub fn total_cost_before_kshs(&self) -> f64 {
        money::to_major_units(self.total_cost_before_cents)
    }

    pub fn tax_kshs(&self) -> f64 {
        money::to_major_units(self.tax_cents)
    }

    pub fn total_cost_kshs(&self) -> f64 {
        money::to_major_units(self.total_cost_cents)
    }
}
