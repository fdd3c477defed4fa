//! # Order Types
//!
//! The order aggregate: purchased line items plus a settlement status.
//! Status only moves forward (`open -> paid`); the order itself refuses
//! any other transition.

use crate::error::{PaymentError, PaymentResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A line item in an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name
    pub name: String,

    /// Quantity
    pub quantity: u32,

    /// Unit price in the smallest unit. Not validated, negative lines are allowed.
    pub unit_price: i64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Calculate the total price for this line item, saturating at the `i64` bounds
    pub fn total(&self) -> i64 {
        clamp_to_i64(self.exact_total())
    }

    /// Total price, or `None` if it does not fit in an `i64`
    pub fn checked_total(&self) -> Option<i64> {
        i64::from(self.quantity).checked_mul(self.unit_price)
    }

    fn exact_total(&self) -> i128 {
        i128::from(self.quantity) * i128::from(self.unit_price)
    }
}

fn clamp_to_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Settlement status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting settlement
    Open,
    /// Settled by a payment strategy
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Paid => "paid",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Open
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order awaiting (or having completed) settlement
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Unique order ID (generated)
    pub id: String,

    /// Created timestamp
    pub created_at: DateTime<Utc>,

    line_items: Vec<LineItem>,

    status: OrderStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    paid_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Create an empty, open order with a generated ID
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            line_items: Vec::new(),
            status: OrderStatus::Open,
            paid_at: None,
        }
    }

    /// Append a line item. Items are never edited or removed.
    pub fn add_item(&mut self, name: impl Into<String>, quantity: u32, unit_price: i64) {
        self.line_items.push(LineItem::new(name, quantity, unit_price));
    }

    /// Builder: append a line item
    pub fn with_item(mut self, name: impl Into<String>, quantity: u32, unit_price: i64) -> Self {
        self.add_item(name, quantity, unit_price);
        self
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Sum of `quantity * unit_price` over all items; zero when empty.
    ///
    /// Accumulates exactly and saturates at the `i64` bounds. Use
    /// [`Order::checked_total_price`] to detect overflow instead.
    pub fn total_price(&self) -> i64 {
        let exact = self
            .line_items
            .iter()
            .fold(0i128, |acc, item| acc.saturating_add(item.exact_total()));
        clamp_to_i64(exact)
    }

    /// Total price, or `None` if any line or the sum overflows an `i64`
    pub fn checked_total_price(&self) -> Option<i64> {
        self.line_items
            .iter()
            .try_fold(0i64, |acc, item| acc.checked_add(item.checked_total()?))
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// When the order was settled, if it has been
    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }

    /// Change the status, allowing only forward moves.
    ///
    /// `open -> open` is a no-op and `open -> paid` settles the order.
    /// A second `paid` fails with [`PaymentError::AlreadyPaid`] so that of two
    /// competing settlements only the first wins; `paid -> open` fails with
    /// [`PaymentError::InvalidStatusTransition`].
    pub fn set_status(&mut self, status: OrderStatus) -> PaymentResult<()> {
        match (self.status, status) {
            (OrderStatus::Open, OrderStatus::Open) => Ok(()),
            (OrderStatus::Open, OrderStatus::Paid) => {
                self.status = OrderStatus::Paid;
                self.paid_at = Some(Utc::now());
                Ok(())
            }
            (OrderStatus::Paid, OrderStatus::Paid) => Err(PaymentError::AlreadyPaid {
                order_id: self.id.clone(),
            }),
            (from, to) => Err(PaymentError::InvalidStatusTransition { from, to }),
        }
    }

    /// Fail with [`PaymentError::AlreadyPaid`] unless the order is still open.
    ///
    /// Strategies call this before any channel work so a losing settlement
    /// stops before charging.
    pub fn require_open(&self) -> PaymentResult<()> {
        match self.status {
            OrderStatus::Open => Ok(()),
            OrderStatus::Paid => Err(PaymentError::AlreadyPaid {
                order_id: self.id.clone(),
            }),
        }
    }

    /// Settle the order. Called by payment strategies once their checks pass.
    pub fn mark_paid(&mut self) -> PaymentResult<()> {
        self.set_status(OrderStatus::Paid)
    }

    /// Check if order is empty
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Get item count
    pub fn item_count(&self) -> u64 {
        self.line_items
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(u64::from(i.quantity)))
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}
