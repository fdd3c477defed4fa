//! # Card Payments
//!
//! Debit and credit card channels. Debit is gated behind an authorizer;
//! credit runs its own credit check and settles without one.

use pay_core::{
    require_authorization, Order, PaymentResult, PaymentStrategy, SharedAuthorizer,
};
use tracing::{info, instrument};

/// Mask all but the last character of a secret for logging
pub(crate) fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    secret
        .chars()
        .enumerate()
        .map(|(i, c)| if i + 1 == count { c } else { '*' })
        .collect()
}

/// Debit card strategy, gated by an injected authorizer
pub struct DebitCardPayment {
    security_code: String,
    authorizer: SharedAuthorizer,
}

impl DebitCardPayment {
    pub fn new(security_code: impl Into<String>, authorizer: SharedAuthorizer) -> Self {
        Self {
            security_code: security_code.into(),
            authorizer,
        }
    }
}

impl PaymentStrategy for DebitCardPayment {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    fn pay(&self, order: &mut Order) -> PaymentResult<()> {
        require_authorization(self.authorizer.as_ref(), self.channel_name())?;
        order.require_open()?;

        info!("processing debit payment");
        info!(security_code = %mask_secret(&self.security_code), "verifying security code");
        order.mark_paid()?;

        info!(total = order.total_price(), "debit payment settled");
        Ok(())
    }

    fn channel_name(&self) -> &'static str {
        "debit"
    }
}

/// Credit card strategy. Needs no authorizer.
pub struct CreditCardPayment {
    security_code: String,
}

impl CreditCardPayment {
    pub fn new(security_code: impl Into<String>) -> Self {
        Self {
            security_code: security_code.into(),
        }
    }
}

impl PaymentStrategy for CreditCardPayment {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    fn pay(&self, order: &mut Order) -> PaymentResult<()> {
        order.require_open()?;

        info!("processing credit check");
        info!(security_code = %mask_secret(&self.security_code), "verifying security code");
        order.mark_paid()?;

        info!(total = order.total_price(), "credit payment settled");
        Ok(())
    }

    fn channel_name(&self) -> &'static str {
        "credit"
    }
}
