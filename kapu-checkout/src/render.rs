use kapu_core::money;

use crate::view::CheckoutView;

/// Shown while the cart is empty or delivery options are missing, and also
/// after a failed options fetch: errors degrade to this, indefinitely.
pub const NO_ITEMS_PLACEHOLDER: &str = "No items in cart or delivery options unavailable.";

/// Shown until the payment summary arrives; a failed fetch keeps it forever.
pub const LOADING_PAYMENT_PLACEHOLDER: &str = "Loading payment summary...";

/// Render the checkout page as plain text.
pub fn render_page(view: &CheckoutView, currency_label: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("KAPU Checkout ({} items)\n", view.item_count()));
    out.push_str("\nReview your order\n\n");

    if view.has_order_summary() {
        for line in view.line_items() {
            out.push_str(&format!("Delivery date: {}\n", line.delivery_date_label));
            out.push_str(&format!("  {}\n", line.product_name));
            out.push_str(&format!(
                "  {} {}\n",
                currency_label,
                money::format_money(line.unit_price_kshs)
            ));
            out.push_str(&format!(
                "  Quantity: {}    Update | Delete\n",
                line.quantity
            ));
            out.push_str("  Choose a delivery option:\n");
            for option in &line.options {
                let mark = if option.selected { "(*)" } else { "( )" };
                out.push_str(&format!(
                    "    {} {} - {}\n",
                    mark, option.date_label, option.price_label
                ));
            }
            out.push('\n');
        }
    } else {
        out.push_str(NO_ITEMS_PLACEHOLDER);
        out.push_str("\n\n");
    }

    out.push_str("Payment Summary\n");
    match view.payment_summary() {
        Some(summary) => {
            out.push_str(&format!(
                "Items ({}): {}\n",
                summary.total_items,
                money::format_money(summary.price_cost_kshs())
            ));
            out.push_str(&format!(
                "Shipping & handling: {}\n",
                money::format_money(summary.shipping_cost_kshs())
            ));
            out.push_str(&format!(
                "Total before tax: {}\n",
                money::format_money(summary.total_cost_before_kshs())
            ));
            out.push_str(&format!(
                "Estimated tax (10%): {}\n",
                money::format_money(summary.tax_kshs())
            ));
            out.push_str(&format!(
                "Order total: {}\n",
                money::format_money(summary.total_cost_kshs())
            ));
            out.push_str("[ Place your order ]\n");
        }
        None => {
            out.push_str(LOADING_PAYMENT_PLACEHOLDER);
            out.push('\n');
        }
    }

    out
}
