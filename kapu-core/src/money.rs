/// Convert an amount in minor currency units (cents) to major units.
pub fn to_major_units(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Format a major-unit amount for display, with exactly two decimals.
/// Rounding happens here and only here.
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}
