use std::time::Duration;

use kapu_checkout::app_config::Config;
use kapu_checkout::{render, CheckoutView};
use kapu_client::OrderServiceClient;
use kapu_core::CartItem;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kapu_checkout=debug,kapu_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!(
        "Checkout against order service at {}",
        config.order_service.base_url
    );

    let cart_path = std::env::args().nth(1).unwrap_or_else(|| "cart.json".to_string());
    let cart = load_cart(&cart_path);

    let client = OrderServiceClient::new(
        &config.order_service.base_url,
        Duration::from_secs(config.order_service.timeout_seconds),
    )
    .expect("Failed to build order service client");

    let mut view = CheckoutView::new(cart);
    view.load(&client).await;

    println!("{}", render::render_page(&view, &config.display.currency_label));
}

/// Read the cart document. A missing file or malformed/non-array document
/// degrades to an empty cart, which renders the no-items placeholder.
fn load_cart(path: &str) -> Vec<CartItem> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, path, "Cart file unreadable, starting with an empty cart");
            return Vec::new();
        }
    };

    match kapu_core::cart::parse_cart(&raw) {
        Ok(cart) => cart,
        Err(err) => {
            tracing::warn!(error = %err, path, "Malformed cart document, starting with an empty cart");
            Vec::new()
        }
    }
}
