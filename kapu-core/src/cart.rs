use serde::{Deserialize, Serialize};

use crate::money;
use crate::CoreResult;

/// A product as embedded in a cart line. Every field may be absent in the
/// cart document; display falls back to defaults instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price_kshs: Option<f64>,
    pub price_cents: Option<i64>,
}

impl Product {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed product")
    }

    /// Resolve the unit price in major units: a non-zero `priceKshs` wins,
    /// else a non-zero `priceCents`, else zero. Zero values fall through.
    /// The precedence between the two backend field conventions is
    /// unconfirmed upstream; this matches the contract as observed.
    pub fn unit_price_kshs(&self) -> f64 {
        match self.price_kshs {
            Some(p) if p != 0.0 => p,
            _ => match self.price_cents {
                Some(c) if c != 0 => money::to_major_units(c),
                _ => 0.0,
            },
        }
    }
}

/// One product line in the cart, with a quantity and the delivery option the
/// customer picked for it. Owned by the parent cart; the checkout view never
/// mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: i64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub delivery_option_id: Option<String>,
    #[serde(default)]
    pub product: Option<Product>,
}

impl CartItem {
    pub fn display_name(&self) -> &str {
        self.product
            .as_ref()
            .map(Product::display_name)
            .unwrap_or("Unnamed product")
    }

    pub fn unit_price_kshs(&self) -> f64 {
        self.product
            .as_ref()
            .map(Product::unit_price_kshs)
            .unwrap_or(0.0)
    }
}

/// Parse a cart document: a JSON array of cart items.
pub fn parse_cart(raw: &str) -> CoreResult<Vec<CartItem>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_cart_document() {
        let cart = parse_cart(
            r#"[{"productId":1,"deliveryOptionId":"d1","quantity":2,
                "product":{"name":"Mug","priceKshs":20}}]"#,
        )
        .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product_id, 1);
        assert_eq!(cart[0].quantity, 2);
        assert_eq!(cart[0].delivery_option_id.as_deref(), Some("d1"));
        assert_eq!(cart[0].display_name(), "Mug");
        assert_eq!(cart[0].unit_price_kshs(), 20.0);
    }

    #[test]
    fn rejects_non_array_cart_document() {
        assert!(parse_cart(r#"{"productId":1}"#).is_err());
        assert!(parse_cart("not json").is_err());
    }

    #[test]
    fn major_unit_price_wins_over_minor() {
        let product = Product {
            price_kshs: Some(20.0),
            price_cents: Some(9900),
            ..Product::default()
        };
        assert_eq!(product.unit_price_kshs(), 20.0);
    }

    #[test]
    fn zero_major_unit_price_falls_through_to_cents() {
        let product = Product {
            price_kshs: Some(0.0),
            price_cents: Some(2500),
            ..Product::default()
        };
        assert_eq!(product.unit_price_kshs(), 25.0);
    }

    #[test]
    fn missing_prices_resolve_to_zero() {
        assert_eq!(Product::default().unit_price_kshs(), 0.0);

        let item = CartItem {
            product_id: 7,
            quantity: 1,
            delivery_option_id: None,
            product: None,
        };
        assert_eq!(item.unit_price_kshs(), 0.0);
        assert_eq!(item.display_name(), "Unnamed product");
    }
}
