//! # Order Reports
//!
//! Human-readable and JSON renderings of an order's items, total and status.

use chrono::{DateTime, Utc};
use pay_core::{LineItem, Order, OrderStatus};
use serde::Serialize;
use std::fmt;

/// Text block describing one order
pub struct OrderReport<'a> {
    order: &'a Order,
}

impl<'a> OrderReport<'a> {
    pub fn new(order: &'a Order) -> Self {
        Self { order }
    }
}

impl fmt::Display for OrderReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Order -----")?;
        writeln!(f, "id: {}", self.order.id)?;
        writeln!(f, "items:")?;
        for item in self.order.line_items() {
            writeln!(
                f,
                "  {} x{} @ {} = {}",
                item.name,
                item.quantity,
                item.unit_price,
                item.total()
            )?;
        }
        writeln!(f, "total price: {}", self.order.total_price())?;
        writeln!(f, "status: {}", self.order.status())?;
        writeln!(f, "-----------------")
    }
}

/// Serializable snapshot of an order, including the derived total
#[derive(Debug, Serialize)]
pub struct OrderView<'a> {
    pub id: &'a str,
    pub items: &'a [LineItem],
    pub total_price: i64,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

impl<'a> From<&'a Order> for OrderView<'a> {
    fn from(order: &'a Order) -> Self {
        Self {
            id: &order.id,
            items: order.line_items(),
            total_price: order.total_price(),
            status: order.status(),
            paid_at: order.paid_at(),
        }
    }
}

/// Render orders as a pretty-printed JSON array
pub fn render_json(orders: &[&Order]) -> serde_json::Result<String> {
    let views: Vec<OrderView<'_>> = orders.iter().map(|o| OrderView::from(*o)).collect();
    serde_json::to_string_pretty(&views)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report() {
        let order = Order::new().with_item("office", 2, 5000);
        let text = OrderReport::new(&order).to_string();

        assert!(text.starts_with("----- Order -----\n"));
        assert!(text.contains("  office x2 @ 5000 = 10000\n"));
        assert!(text.contains("total price: 10000\n"));
        assert!(text.contains("status: open\n"));
    }

    #[test]
    fn test_json_report() {
        let mut paid = Order::new().with_item("Samsung", 1, 10000);
        paid.mark_paid().unwrap();
        let open = Order::new();

        let json: serde_json::Value =
            serde_json::from_str(&render_json(&[&paid, &open]).unwrap()).unwrap();

        assert_eq!(json[0]["total_price"], 10000);
        assert_eq!(json[0]["status"], "paid");
        assert!(json[0]["paid_at"].is_string());
        assert_eq!(json[1]["total_price"], 0);
        assert_eq!(json[1]["status"], "open");
        assert!(json[1].get("paid_at").is_none());
    }
}
