use kapu_client::{OrderService, Remote};
use kapu_core::{CartItem, DeliveryOption, PaymentSummary};

/// State of the checkout page: the cart lines handed over by the parent
/// cart, plus the two independently fetched slices. The cart is never
/// mutated here, and each slice is populated at most once.
pub struct CheckoutView {
    cart: Vec<CartItem>,
    delivery_options: Remote<Vec<DeliveryOption>>,
    payment_summary: Remote<PaymentSummary>,
}

/// One rendered cart line: resolved price, delivery date, and a radio row
/// per available delivery option.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub delivery_date_label: String,
    pub product_name: String,
    pub unit_price_kshs: f64,
    pub quantity: u32,
    pub options: Vec<OptionRow>,
}

/// A radio row mirroring, but not allowing change of, the item's current
/// delivery selection.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow {
    pub selected: bool,
    pub date_label: String,
    pub price_label: String,
}

impl CheckoutView {
    pub fn new(cart: Vec<CartItem>) -> Self {
        Self {
            cart,
            delivery_options: Remote::NotLoaded,
            payment_summary: Remote::NotLoaded,
        }
    }

    /// Issue both reads concurrently and unordered. Each fetch runs at most
    /// once per view lifetime; a failure is logged and leaves its slice
    /// `Failed`, which renders the same as not-loaded.
    pub async fn load(&mut self, svc: &dyn OrderService) {
        let want_options = self.delivery_options.is_not_loaded();
        let want_summary = self.payment_summary.is_not_loaded();

        let (options, summary) = tokio::join!(
            async {
                if want_options {
                    Some(svc.delivery_options().await)
                } else {
                    None
                }
            },
            async {
                if want_summary {
                    Some(svc.payment_summary().await)
                } else {
                    None
                }
            },
        );

        if let Some(result) = options {
            self.delivery_options = match result {
                Ok(list) => Remote::Loaded(list),
                Err(err) => {
                    tracing::error!(error = %err, "Delivery options fetch error");
                    Remote::Failed
                }
            };
        }

        if let Some(result) = summary {
            self.payment_summary = match result {
                Ok(summary) => Remote::Loaded(summary),
                Err(err) => {
                    tracing::error!(error = %err, "Payment summary fetch error");
                    Remote::Failed
                }
            };
        }
    }

    /// Number of cart lines, for the "Checkout (N items)" header.
    pub fn item_count(&self) -> usize {
        self.cart.len()
    }

    /// The order summary renders only with a non-empty cart AND a loaded,
    /// non-empty delivery options list.
    pub fn has_order_summary(&self) -> bool {
        !self.cart.is_empty()
            && self
                .delivery_options
                .loaded()
                .is_some_and(|options| !options.is_empty())
    }

    /// The fetched payment summary, once loaded.
    pub fn payment_summary(&self) -> Option<&PaymentSummary> {
        self.payment_summary.loaded()
    }

    pub fn delivery_options(&self) -> &Remote<Vec<DeliveryOption>> {
        &self.delivery_options
    }

    /// Join each cart line with its delivery option. No matching option
    /// yields the "No delivery date" sentinel; an option without a
    /// timestamp yields "No date" in its radio row.
    pub fn line_items(&self) -> Vec<LineItem> {
        let options: &[DeliveryOption] = self
            .delivery_options
            .loaded()
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        self.cart
            .iter()
            .map(|item| {
                let selected = item
                    .delivery_option_id
                    .as_deref()
                    .and_then(|id| options.iter().find(|option| option.id == id));

                LineItem {
                    delivery_date_label: selected
                        .and_then(|option| option.delivery_date())
                        .unwrap_or_else(|| "No delivery date".to_string()),
                    product_name: item.display_name().to_string(),
                    unit_price_kshs: item.unit_price_kshs(),
                    quantity: item.quantity,
                    options: options
                        .iter()
                        .map(|option| OptionRow {
                            selected: item.delivery_option_id.as_deref()
                                == Some(option.id.as_str()),
                            date_label: option
                                .delivery_date()
                                .unwrap_or_else(|| "No date".to_string()),
                            price_label: option.price_label(),
                        })
                        .collect(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use kapu_client::ClientError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned order service. `None` for a slice makes its fetch fail.
    struct StubService {
        options: Option<Vec<DeliveryOption>>,
        summary: Option<PaymentSummary>,
        options_calls: AtomicUsize,
        summary_calls: AtomicUsize,
    }

    impl StubService {
        fn new(options: Option<Vec<DeliveryOption>>, summary: Option<PaymentSummary>) -> Self {
            Self {
                options,
                summary,
                options_calls: AtomicUsize::new(0),
                summary_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl OrderService for StubService {
        async fn delivery_options(&self) -> Result<Vec<DeliveryOption>, ClientError> {
            self.options_calls.fetch_add(1, Ordering::SeqCst);
            self.options
                .clone()
                .ok_or_else(|| ClientError::InvalidBaseUrl("stub".to_string()))
        }

        async fn payment_summary(&self) -> Result<PaymentSummary, ClientError> {
            self.summary_calls.fetch_add(1, Ordering::SeqCst);
            self.summary
                .clone()
                .ok_or_else(|| ClientError::InvalidBaseUrl("stub".to_string()))
        }
    }

    fn mug_cart() -> Vec<CartItem> {
        kapu_core::cart::parse_cart(
            r#"[{"productId":1,"deliveryOptionId":"d1","quantity":2,
                "product":{"name":"Mug","priceKshs":20}}]"#,
        )
        .unwrap()
    }

    fn standard_option() -> DeliveryOption {
        // 2026-09-07 08:30:00 UTC, a Monday.
        DeliveryOption {
            id: "d1".to_string(),
            price_kshs: 0.0,
            estimated_delivery_time_ms: Some(1_788_769_800_000),
        }
    }

    #[tokio::test]
    async fn empty_cart_has_no_order_summary() {
        let svc = StubService::new(Some(vec![standard_option()]), Some(PaymentSummary::default()));
        let mut view = CheckoutView::new(Vec::new());
        view.load(&svc).await;

        assert_eq!(view.item_count(), 0);
        assert!(!view.has_order_summary());
        assert!(view.line_items().is_empty());
    }

    #[tokio::test]
    async fn empty_options_list_suppresses_order_summary() {
        let svc = StubService::new(Some(Vec::new()), Some(PaymentSummary::default()));
        let mut view = CheckoutView::new(mug_cart());
        view.load(&svc).await;

        assert!(!view.has_order_summary());
    }

    #[tokio::test]
    async fn failed_options_fetch_degrades_to_placeholder_state() {
        let svc = StubService::new(None, Some(PaymentSummary::default()));
        let mut view = CheckoutView::new(mug_cart());
        view.load(&svc).await;

        assert!(view.delivery_options().is_failed());
        assert!(!view.has_order_summary());
        // The other slice is unaffected.
        assert!(view.payment_summary().is_some());
    }

    #[tokio::test]
    async fn failed_summary_fetch_keeps_loading_placeholder() {
        let svc = StubService::new(Some(vec![standard_option()]), None);
        let mut view = CheckoutView::new(mug_cart());
        view.load(&svc).await;

        assert!(view.payment_summary().is_none());
        assert!(view.has_order_summary());
    }

    #[tokio::test]
    async fn joins_cart_line_with_selected_delivery_option() {
        let svc = StubService::new(Some(vec![standard_option()]), Some(PaymentSummary::default()));
        let mut view = CheckoutView::new(mug_cart());
        view.load(&svc).await;

        let lines = view.line_items();
        assert_eq!(lines.len(), 1);

        let line = &lines[0];
        assert_eq!(line.product_name, "Mug");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price_kshs, 20.0);
        assert_eq!(line.delivery_date_label, "Monday, September 7");

        assert_eq!(line.options.len(), 1);
        assert!(line.options[0].selected);
        assert_eq!(line.options[0].date_label, "Monday, September 7");
        assert_eq!(line.options[0].price_label, "Free Shipping");
    }

    #[tokio::test]
    async fn unmatched_selection_renders_no_delivery_date() {
        let other = DeliveryOption {
            id: "d9".to_string(),
            ..standard_option()
        };
        let svc = StubService::new(Some(vec![other]), Some(PaymentSummary::default()));
        let mut view = CheckoutView::new(mug_cart());
        view.load(&svc).await;

        let lines = view.line_items();
        assert_eq!(lines[0].delivery_date_label, "No delivery date");
        assert!(!lines[0].options[0].selected);
    }

    #[tokio::test]
    async fn option_without_timestamp_renders_no_date() {
        let undated = DeliveryOption {
            estimated_delivery_time_ms: None,
            ..standard_option()
        };
        let svc = StubService::new(Some(vec![undated]), Some(PaymentSummary::default()));
        let mut view = CheckoutView::new(mug_cart());
        view.load(&svc).await;

        let lines = view.line_items();
        assert_eq!(lines[0].options[0].date_label, "No date");
    }

    #[tokio::test]
    async fn load_issues_each_fetch_at_most_once() {
        let svc = StubService::new(Some(vec![standard_option()]), Some(PaymentSummary::default()));
        let mut view = CheckoutView::new(mug_cart());
        view.load(&svc).await;
        view.load(&svc).await;

        assert_eq!(svc.options_calls.load(Ordering::SeqCst), 1);
        assert_eq!(svc.summary_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_retried_on_reload() {
        let svc = StubService::new(None, None);
        let mut view = CheckoutView::new(mug_cart());
        view.load(&svc).await;
        view.load(&svc).await;

        assert_eq!(svc.options_calls.load(Ordering::SeqCst), 1);
        assert_eq!(svc.summary_calls.load(Ordering::SeqCst), 1);
    }
}
