//! # pay-channels
//!
//! Payment strategies for lightning-cart-rs.
//!
//! This crate provides three channels:
//!
//! 1. **DebitCardPayment** - card security code, gated by an authorizer
//! 2. **CreditCardPayment** - card security code, no authorizer
//! 3. **PaypalPayment** - account email, gated by an authorizer
//!
//! Gated channels take a `SharedAuthorizer`; they never build one.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_channels::{ChannelConfig, PaypalPayment};
//! use pay_core::{Order, PaymentStrategy, RobotAuthorizer};
//!
//! let config = ChannelConfig::from_env()?;
//! let robot = RobotAuthorizer::shared();
//! robot.verify_not_robot();
//!
//! let paypal = PaypalPayment::new(config.email_address, robot);
//! paypal.pay(&mut order)?;
//! ```

pub mod card;
pub mod config;
pub mod paypal;

// Re-exports
pub use card::{CreditCardPayment, DebitCardPayment};
pub use config::ChannelConfig;
pub use paypal::PaypalPayment;

use pay_core::{PaymentChannel, PaymentStrategySelector, SharedAuthorizer};
use std::sync::Arc;

/// Build the strategy for a channel label from configured credentials.
///
/// Credit ignores the authorizer; the gated channels borrow it.
pub fn build_strategy(
    channel: PaymentChannel,
    config: &ChannelConfig,
    authorizer: SharedAuthorizer,
) -> pay_core::BoxedPaymentStrategy {
    match channel {
        PaymentChannel::Debit => Arc::new(DebitCardPayment::new(
            config.security_code.clone(),
            authorizer,
        )),
        PaymentChannel::Credit => Arc::new(CreditCardPayment::new(config.security_code.clone())),
        PaymentChannel::Paypal => {
            Arc::new(PaypalPayment::new(config.email_address.clone(), authorizer))
        }
    }
}

/// Selector with every built-in channel registered
pub fn default_selector(
    config: &ChannelConfig,
    authorizer: SharedAuthorizer,
) -> PaymentStrategySelector {
    PaymentChannel::ALL
        .iter()
        .fold(PaymentStrategySelector::new(), |selector, channel| {
            selector.with_strategy(build_strategy(*channel, config, authorizer.clone()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::{Order, PaymentStrategy, SmsAuthorizer};

    #[test]
    fn test_build_strategy_names() {
        let config = ChannelConfig::new("1234", "alice@daemonico.com");
        let sms: SharedAuthorizer = SmsAuthorizer::shared();

        for channel in PaymentChannel::ALL {
            let strategy = build_strategy(channel, &config, sms.clone());
            assert_eq!(strategy.channel_name(), channel.as_str());
        }
    }

    #[test]
    fn test_default_selector() {
        let config = ChannelConfig::new("1234", "alice@daemonico.com");
        let sms = SmsAuthorizer::shared();
        let selector = default_selector(&config, sms.clone());

        assert_eq!(selector.channels(), vec!["credit", "debit", "paypal"]);
        assert_eq!(selector.get("paypal").unwrap().channel_name(), "paypal");

        let mut order = Order::new().with_item("office", 2, 5000);
        assert!(selector.settle("paypal", &mut order).is_err());

        sms.verify_sms_code("1234");
        selector.settle("paypal", &mut order).unwrap();
        assert!(order.is_paid());
    }
}
