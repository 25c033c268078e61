pub mod cart;
pub mod delivery;
pub mod money;
pub mod payment;

pub use cart::{CartItem, Product};
pub use delivery::DeliveryOption;
pub use payment::PaymentSummary;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed cart document: {0}")]
    MalformedCart(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
