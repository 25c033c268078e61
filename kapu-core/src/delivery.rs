use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money;

/// A shipping tier offered by the order service, with a price in major
/// units and an estimated delivery timestamp in epoch milliseconds.
/// The fetched list is immutable for the lifetime of a checkout view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOption {
    pub id: String,
    #[serde(default)]
    pub price_kshs: f64,
    #[serde(default)]
    pub estimated_delivery_time_ms: Option<i64>,
}

impl DeliveryOption {
    /// Long-form estimated delivery date, e.g. "Monday, September 7".
    /// `None` when the timestamp is absent or unrepresentable.
    pub fn delivery_date(&self) -> Option<String> {
        let ms = self.estimated_delivery_time_ms?;
        let ts: DateTime<Utc> = DateTime::from_timestamp_millis(ms)?;
        Some(ts.format("%A, %B %-d").to_string())
    }

    /// Shipping price label: anything not strictly positive is free.
    pub fn price_label(&self) -> String {
        if self.price_kshs > 0.0 {
            format!("{} - Shipping", money::format_money(self.price_kshs))
        } else {
            "Free Shipping".to_string()
        }
    }
}
