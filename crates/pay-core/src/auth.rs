//! # Authorizers
//!
//! Authorization is a capability separate from payment. A strategy that
//! needs it is handed a [`SharedAuthorizer`] at construction and only ever
//! asks [`Authorizer::is_authorized`]. How the verdict was reached (SMS code,
//! robot challenge, ...) stays on the concrete type.
//!
//! ```text
//!        Authorizer (trait)
//!        └── is_authorized()
//!                 ▲
//!        ┌────────┴────────┐
//!  SmsAuthorizer     RobotAuthorizer
//!  verify_sms_code   verify_not_robot
//! ```

use crate::error::{PaymentError, PaymentResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Yields a verdict on whether a settlement may proceed.
pub trait Authorizer: Send + Sync {
    fn is_authorized(&self) -> bool;
}

/// Shared handle injected into gated strategies. The strategy never owns
/// the authorizer exclusively; the driver keeps its own handle to verify it.
pub type SharedAuthorizer = Arc<dyn Authorizer>;

/// Fail with [`PaymentError::AuthorizationFailed`] unless the authorizer has
/// granted its verdict. Every gated channel goes through this gate first.
pub fn require_authorization(authorizer: &dyn Authorizer, channel: &str) -> PaymentResult<()> {
    if authorizer.is_authorized() {
        Ok(())
    } else {
        debug!(channel, "settlement blocked, authorizer not verified");
        Err(PaymentError::AuthorizationFailed {
            channel: channel.to_string(),
        })
    }
}

/// Sticky verdict flag. Writes use `Release` and reads `Acquire` so a
/// verification on one thread is visible to settlement on another.
#[derive(Debug, Default)]
struct Verdict(AtomicBool);

impl Verdict {
    fn grant(&self) {
        self.0.store(true, Ordering::Release);
    }

    fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Two-factor authorization by SMS code.
///
/// The code is not checked; any input grants the verdict.
#[derive(Debug, Default)]
pub struct SmsAuthorizer {
    verdict: Verdict,
}

impl SmsAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor returning the shared handle directly
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn verify_sms_code(&self, code: &str) {
        info!(code_len = code.len(), "verifying SMS code");
        self.verdict.grant();
    }
}

impl Authorizer for SmsAuthorizer {
    fn is_authorized(&self) -> bool {
        self.verdict.get()
    }
}

/// "I am not a robot" challenge. A single confirmation grants the verdict.
#[derive(Debug, Default)]
pub struct RobotAuthorizer {
    verdict: Verdict,
}

impl RobotAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn verify_not_robot(&self) {
        info!("confirming caller is not a robot");
        self.verdict.grant();
    }
}

impl Authorizer for RobotAuthorizer {
    fn is_authorized(&self) -> bool {
        self.verdict.get()
    }
}
