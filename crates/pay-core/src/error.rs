//! # Payment Error Types
//!
//! Typed error handling for the lightning-cart settlement model.
//! All settlement operations return `Result<T, PaymentError>`.

use crate::order::OrderStatus;
use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// A gated channel was asked to settle before its authorizer verified
    #[error("Authorization failed for {channel} payment")]
    AuthorizationFailed { channel: String },

    /// The order was already settled by an earlier payment
    #[error("Order {order_id} is already paid")]
    AlreadyPaid { order_id: String },

    /// Status change that would move an order backwards
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },

    /// Payment channel label not recognised
    #[error("Unsupported payment channel: {channel}")]
    UnsupportedChannel { channel: String },

    /// Configuration errors (missing credentials, malformed values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cart data could not be turned into an order
    #[error("Invalid cart: {0}")]
    InvalidCart(String),
}

impl PaymentError {
    /// Returns true if the caller can fix the cause and retry the same payment.
    ///
    /// An authorization failure leaves the order open; verifying the
    /// authorizer and calling `pay` again is enough.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PaymentError::AuthorizationFailed { .. })
    }

    /// Process exit code used by the command line driver
    pub fn exit_code(&self) -> i32 {
        match self {
            PaymentError::AuthorizationFailed { .. } => 3,
            PaymentError::AlreadyPaid { .. } => 4,
            PaymentError::InvalidStatusTransition { .. } => 4,
            PaymentError::UnsupportedChannel { .. } => 2,
            PaymentError::Configuration(_) => 78,
            PaymentError::InvalidCart(_) => 65,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
