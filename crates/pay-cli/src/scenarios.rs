//! # Walkthrough
//!
//! Three orders: a phone paid by debit card behind SMS verification, a
//! chair paid through PayPal behind a robot check, and a car left open.

use pay_channels::{ChannelConfig, DebitCardPayment, PaypalPayment};
use pay_core::{Order, PaymentResult, PaymentStrategy, RobotAuthorizer, SmsAuthorizer};
use tracing::info;

/// Run the walkthrough and return the phone, chair and car orders
pub fn run_walkthrough(config: &ChannelConfig) -> PaymentResult<Vec<Order>> {
    let mut phone = Order::new().with_item("Samsung", 1, 10000);
    let car = Order::new().with_item("Volvo", 1, 500000);
    let mut chair = Order::new().with_item("office", 2, 5000);

    let sms = SmsAuthorizer::shared();
    sms.verify_sms_code(&config.security_code);
    DebitCardPayment::new(config.security_code.clone(), sms).pay(&mut phone)?;

    let robot = RobotAuthorizer::shared();
    robot.verify_not_robot();
    PaypalPayment::new(config.email_address.clone(), robot).pay(&mut chair)?;

    info!(
        settled = [&phone, &chair, &car].iter().filter(|o| o.is_paid()).count(),
        "walkthrough finished"
    );
    Ok(vec![phone, chair, car])
}
