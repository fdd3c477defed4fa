//! # Payment Strategy Trait
//!
//! Core Strategy pattern trait for payment channels.
//! Implementations live in `pay-channels`: debit card, credit card, PayPal.
//!
//! ## Design Pattern
//!
//! Each channel is its own type implementing `PaymentStrategy`. The shared
//! signature carries only the order; channel credentials and, for gated
//! channels, an authorizer are injected through the concrete constructor.
//! Adding a channel means adding a type and registering it, nothing else.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PaymentStrategy (trait)                  │
//! │  ├── pay()                                                  │
//! │  └── channel_name()                                         │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴───────┐
//!  │  DebitCard    │ │  CreditCard   │ │    Paypal     │
//!  │  (gated)      │ │  (ungated)    │ │   (gated)     │
//!  └───────────────┘ └───────────────┘ └───────────────┘
//! ```

use crate::error::{PaymentError, PaymentResult};
use crate::order::Order;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

/// Core trait for payment channel implementations.
///
/// Every implementation must settle any open order once its own
/// dependencies are satisfied; no channel may demand more of the caller
/// than `pay(order)`.
pub trait PaymentStrategy: Send + Sync {
    /// Settle the order, moving it from `open` to `paid`.
    ///
    /// On error the order is left untouched.
    fn pay(&self, order: &mut Order) -> PaymentResult<()>;

    /// Get the channel name (for logging and routing).
    fn channel_name(&self) -> &'static str;
}

/// Type alias for a boxed payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;

/// Strategy selector for multiple channels.
///
/// Lookups are exact: an unregistered channel is an error, never a fallback.
#[derive(Clone, Default)]
pub struct PaymentStrategySelector {
    strategies: HashMap<String, BoxedPaymentStrategy>,
}

impl PaymentStrategySelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a payment strategy, replacing any with the same channel name
    pub fn register(&mut self, strategy: BoxedPaymentStrategy) {
        let name = strategy.channel_name().to_string();
        self.strategies.insert(name, strategy);
    }

    /// Register with builder pattern
    pub fn with_strategy(mut self, strategy: BoxedPaymentStrategy) -> Self {
        self.register(strategy);
        self
    }

    /// Get a strategy by channel name
    pub fn get(&self, channel: &str) -> Option<&BoxedPaymentStrategy> {
        self.strategies.get(channel)
    }

    /// Settle an order through the named channel
    pub fn settle(&self, channel: &str, order: &mut Order) -> PaymentResult<()> {
        let strategy = self
            .get(channel)
            .ok_or_else(|| PaymentError::UnsupportedChannel {
                channel: channel.to_string(),
            })?;
        strategy.pay(order)
    }

    /// List all registered channels, sorted
    pub fn channels(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Check if a channel is registered
    pub fn has_channel(&self, channel: &str) -> bool {
        self.strategies.contains_key(channel)
    }
}

/// Channel labels accepted from configuration and the command line.
///
/// Parsing is the only place a free-form label is interpreted; past this
/// point channels are types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentChannel {
    Debit,
    Credit,
    Paypal,
}

impl PaymentChannel {
    pub const ALL: [PaymentChannel; 3] = [
        PaymentChannel::Debit,
        PaymentChannel::Credit,
        PaymentChannel::Paypal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentChannel::Debit => "debit",
            PaymentChannel::Credit => "credit",
            PaymentChannel::Paypal => "paypal",
        }
    }

    /// Whether the built-in strategy for this channel is gated by an authorizer
    pub fn requires_authorization(&self) -> bool {
        match self {
            PaymentChannel::Debit | PaymentChannel::Paypal => true,
            PaymentChannel::Credit => false,
        }
    }
}

impl FromStr for PaymentChannel {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debit" => Ok(PaymentChannel::Debit),
            "credit" => Ok(PaymentChannel::Credit),
            "paypal" => Ok(PaymentChannel::Paypal),
            _ => Err(PaymentError::UnsupportedChannel {
                channel: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PaymentChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
