//! Order repository for database operations.
//!
//! Order creation and mutation belong to the application layer; this
//! repository only provides the reads the bootstrap contract promises
//! callers once initialization has completed.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlx::PgPool;

use ladle_core::{OrderId, OrderStatus};

use super::RepositoryError;
use crate::models::order::Order;

/// Internal row type for `PostgreSQL` order queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i32,
    customer_name: String,
    address: String,
    phone: Option<String>,
    delivery_date: NaiveDate,
    delivery_time: String,
    payment_method: String,
    items: serde_json::Value,
    total: Decimal,
    status: String,
    created_at: NaiveDateTime,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status: OrderStatus = row.status.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid order status in database: {e}"))
        })?;

        Ok(Self {
            id: OrderId::new(row.id),
            customer_name: row.customer_name,
            address: row.address,
            phone: row.phone,
            delivery_date: row.delivery_date,
            delivery_time: row.delivery_time,
            payment_method: row.payment_method,
            items: row.items,
            total: row.total,
            status,
            created_at: row.created_at,
        })
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count all orders.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Get an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored status is
    /// outside the known set.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row: Option<OrderRow> = sqlx::query_as(
            "SELECT id, customer_name, address, phone, delivery_date, delivery_time,
                    payment_method, items, total, status, created_at
             FROM orders
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_row(status: &str) -> OrderRow {
        OrderRow {
            id: 1,
            customer_name: "Mario Rossi".to_owned(),
            address: "1 Via Roma".to_owned(),
            phone: None,
            delivery_date: NaiveDate::from_ymd_opt(2026, 6, 17).unwrap(),
            delivery_time: "18:30".to_owned(),
            payment_method: "card".to_owned(),
            items: json!([{"name": "margherita", "qty": 2}]),
            total: Decimal::new(2450, 2),
            status: status.to_owned(),
            created_at: NaiveDate::from_ymd_opt(2026, 6, 16)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_row_converts_with_known_status() {
        let order: Order = sample_row("pending").try_into().unwrap();
        assert_eq!(order.id, OrderId::new(1));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, Decimal::new(2450, 2));
        assert!(order.items.is_array());
    }

    #[test]
    fn test_row_with_unknown_status_is_data_corruption() {
        let result: Result<Order, _> = sample_row("shipped").try_into();
        let err = result.unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }
}
