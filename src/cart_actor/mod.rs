//! The cart actor: owns the cart, its persistence and its stock checks.

mod service;

pub use service::CartService;
