//! Order domain type.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ladle_core::{OrderId, OrderStatus};

/// A customer order (domain type).
///
/// `items` is a structured JSON document describing the ordered line items;
/// its internal shape is owned by the application, not the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Customer's display name.
    pub customer_name: String,
    /// Delivery address.
    pub address: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Requested delivery date.
    pub delivery_date: NaiveDate,
    /// Requested time-slot code (e.g., "18:30").
    pub delivery_time: String,
    /// Payment method token (e.g., "card", "cash").
    pub payment_method: String,
    /// Ordered line items as a JSON document.
    pub items: serde_json::Value,
    /// Order total, fixed-point with two fraction digits.
    pub total: Decimal,
    /// Lifecycle status, `pending` for new orders.
    pub status: OrderStatus,
    /// When the order was created.
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_serde_roundtrip() {
        let order = Order {
            id: OrderId::new(5),
            customer_name: "Anna Bianchi".to_owned(),
            address: "12 Corso Italia".to_owned(),
            phone: Some("+39 055 000000".to_owned()),
            delivery_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            delivery_time: "20:00".to_owned(),
            payment_method: "cash".to_owned(),
            items: json!([{"name": "carbonara", "qty": 1}]),
            total: Decimal::new(1350, 2),
            status: OrderStatus::Pending,
            created_at: NaiveDate::from_ymd_opt(2026, 6, 30)
                .unwrap()
                .and_hms_opt(9, 15, 0)
                .unwrap(),
        };

        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, order.id);
        assert_eq!(back.total, order.total);
        assert_eq!(back.status, OrderStatus::Pending);
        assert_eq!(back.items, order.items);
    }
}
