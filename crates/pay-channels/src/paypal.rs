//! # PayPal Payments
//!
//! Peer-payment channel identified by an email address instead of a card
//! security code. Gated behind an authorizer like debit.

use pay_core::{
    require_authorization, Order, PaymentResult, PaymentStrategy, SharedAuthorizer,
};
use tracing::{info, instrument};

/// PayPal strategy, gated by an injected authorizer
pub struct PaypalPayment {
    email_address: String,
    authorizer: SharedAuthorizer,
}

impl PaypalPayment {
    pub fn new(email_address: impl Into<String>, authorizer: SharedAuthorizer) -> Self {
        Self {
            email_address: email_address.into(),
            authorizer,
        }
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }
}

impl PaymentStrategy for PaypalPayment {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    fn pay(&self, order: &mut Order) -> PaymentResult<()> {
        require_authorization(self.authorizer.as_ref(), self.channel_name())?;
        order.require_open()?;

        info!("signing in to paypal service");
        info!(email = %self.email_address, "verifying email address");
        order.mark_paid()?;

        info!(total = order.total_price(), "paypal payment settled");
        Ok(())
    }

    fn channel_name(&self) -> &'static str {
        "paypal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::{OrderStatus, PaymentError, RobotAuthorizer, SmsAuthorizer};

    #[test]
    fn test_paypal_with_robot_authorizer() {
        let robot = RobotAuthorizer::shared();
        robot.verify_not_robot();

        let paypal = PaypalPayment::new("alice@daemonico.com", robot);
        let mut order = Order::new().with_item("office", 2, 5000);

        paypal.pay(&mut order).unwrap();
        assert_eq!(order.status(), OrderStatus::Paid);
        assert_eq!(paypal.email_address(), "alice@daemonico.com");
    }

    #[test]
    fn test_paypal_accepts_any_authorizer() {
        let sms = SmsAuthorizer::shared();
        let paypal = PaypalPayment::new("alice@daemonico.com", sms.clone());
        let mut order = Order::new().with_item("office", 2, 5000);

        assert!(matches!(
            paypal.pay(&mut order),
            Err(PaymentError::AuthorizationFailed { .. })
        ));
        assert!(!order.is_paid());

        sms.verify_sms_code("4321");
        paypal.pay(&mut order).unwrap();
        assert!(order.is_paid());
    }
}
