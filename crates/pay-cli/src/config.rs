//! # Driver Configuration
//!
//! Channel credentials and the default channel, read from the environment.
//! Missing credentials fall back to demo values so the walkthrough runs
//! out of the box; malformed ones are still rejected.

use pay_channels::ChannelConfig;
use pay_core::{PaymentChannel, PaymentError};
use std::env;

const DEMO_SECURITY_CODE: &str = "1234";
const DEMO_EMAIL: &str = "alice@daemonico.com";

/// Driver configuration
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Credentials handed to the payment strategies
    pub channels: ChannelConfig,
    /// Channel used when `--channel` is omitted
    pub default_channel: PaymentChannel,
}

impl DemoConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, PaymentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let channels = ChannelConfig::from_lookup(|key| lookup(key).or_else(|| demo_default(key)))?;

        let default_channel = lookup("DEFAULT_CHANNEL")
            .map(|label| label.parse::<PaymentChannel>())
            .transpose()?
            .unwrap_or(PaymentChannel::Debit);

        Ok(Self {
            channels,
            default_channel,
        })
    }
}

fn demo_default(key: &str) -> Option<String> {
    match key {
        "CARD_SECURITY_CODE" => Some(DEMO_SECURITY_CODE.to_string()),
        "PAYPAL_EMAIL" => Some(DEMO_EMAIL.to_string()),
        _ => None,
    }
}
