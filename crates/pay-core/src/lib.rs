//! # pay-core
//!
//! Core types and traits for the lightning-cart settlement model.
//!
//! This crate provides:
//! - `Order` and `LineItem` with a forward-only `OrderStatus`
//! - `Authorizer` capability with `SmsAuthorizer` and `RobotAuthorizer`
//! - `PaymentStrategy` trait and `PaymentStrategySelector` for channels
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{Order, SmsAuthorizer, PaymentStrategy};
//! use pay_channels::DebitCardPayment;
//!
//! let mut order = Order::new();
//! order.add_item("Samsung", 1, 10000);
//!
//! let sms = SmsAuthorizer::shared();
//! let debit = DebitCardPayment::new("1234", sms.clone());
//!
//! assert!(debit.pay(&mut order).is_err()); // not verified yet
//! sms.verify_sms_code("1234");
//! debit.pay(&mut order)?;
//! ```

pub mod auth;
pub mod error;
pub mod order;
pub mod strategy;

// Re-exports for convenience
pub use auth::{
    require_authorization, Authorizer, RobotAuthorizer, SharedAuthorizer, SmsAuthorizer,
};
pub use error::{PaymentError, PaymentResult};
pub use order::{LineItem, Order, OrderStatus};
pub use strategy::{
    BoxedPaymentStrategy, PaymentChannel, PaymentStrategy, PaymentStrategySelector,
};
