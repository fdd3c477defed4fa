//! # Channel Configuration
//!
//! Credentials for the built-in payment channels.
//! Loaded from environment variables (a `.env` file is honoured).

use pay_core::PaymentError;
use std::env;

/// Credentials injected into the payment strategies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Card security code (CVC), 3 or 4 digits
    pub security_code: String,

    /// PayPal account email
    pub email_address: String,
}

impl ChannelConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `CARD_SECURITY_CODE`
    /// - `PAYPAL_EMAIL`
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PaymentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let security_code = lookup("CARD_SECURITY_CODE").ok_or_else(|| {
            PaymentError::Configuration("CARD_SECURITY_CODE not set".to_string())
        })?;

        let email_address = lookup("PAYPAL_EMAIL")
            .ok_or_else(|| PaymentError::Configuration("PAYPAL_EMAIL not set".to_string()))?;

        let config = Self {
            security_code,
            email_address,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create config with explicit values
    pub fn new(security_code: impl Into<String>, email_address: impl Into<String>) -> Self {
        Self {
            security_code: security_code.into(),
            email_address: email_address.into(),
        }
    }

    /// Check credential formats
    pub fn validate(&self) -> Result<(), PaymentError> {
        let code = self.security_code.as_str();
        if !(3..=4).contains(&code.len()) || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PaymentError::Configuration(
                "CARD_SECURITY_CODE must be 3 or 4 digits".to_string(),
            ));
        }

        if !self.email_address.contains('@') {
            return Err(PaymentError::Configuration(
                "PAYPAL_EMAIL must be an email address".to_string(),
            ));
        }

        Ok(())
    }
}
