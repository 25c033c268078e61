pub mod order_service;
pub mod remote;

pub use order_service::{ClientError, OrderService, OrderServiceClient};
pub use remote::Remote;
