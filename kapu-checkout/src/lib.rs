pub mod app_config;
pub mod render;
pub mod view;

pub use view::CheckoutView;
