//! # Cart Files
//!
//! Carts are TOML files listing line items:
//!
//! ```toml
//! [[items]]
//! name = "office"
//! quantity = 2
//! unit_price = 5000
//! ```

use anyhow::Context;
use pay_core::{LineItem, Order, PaymentError, PaymentResult};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Line items to be turned into an order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Parse a cart from TOML
    pub fn from_toml(toml_str: &str) -> PaymentResult<Self> {
        toml::from_str(toml_str).map_err(|e| PaymentError::InvalidCart(e.to_string()))
    }

    /// Read and parse a cart file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read cart {}", path.display()))?;
        let cart = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse cart {}", path.display()))?;
        debug!(items = cart.items.len(), path = %path.display(), "loaded cart");
        Ok(cart)
    }

    /// Build an open order holding every item, in file order.
    ///
    /// Fails with [`PaymentError::InvalidCart`] if the order total does not
    /// fit in an `i64`.
    pub fn into_order(self) -> PaymentResult<Order> {
        if self.items.is_empty() {
            warn!("cart has no items, order total will be zero");
        }
        let order = self
            .items
            .into_iter()
            .fold(Order::new(), |order, item| {
                order.with_item(item.name, item.quantity, item.unit_price)
            });

        order.checked_total_price().ok_or_else(|| {
            PaymentError::InvalidCart("order total overflows a 64-bit amount".into())
        })?;
        Ok(order)
    }
}
