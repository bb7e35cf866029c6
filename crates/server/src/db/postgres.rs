//! `PostgreSQL`-backed order store.
//!
//! Queries are bound at runtime against the `customer_order` table; see
//! `migrations/` for the schema.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use order_management_core::{Order, OrderId, OrderRecord};

use super::{OrderStore, StoreError};

/// Order store backed by `PostgreSQL`.
#[derive(Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    /// Create a new store over an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape shared by every query that returns a full order.
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    customer_name: String,
    order_date: Option<NaiveDate>,
    shipping_address: String,
    total: Decimal,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            customer_name: row.customer_name,
            order_date: row.order_date,
            shipping_address: row.shipping_address,
            total: row.total,
        }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, customer_name, order_date, shipping_address, total
            FROM customer_order
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Order::from))
    }

    async fn save(&self, record: OrderRecord) -> Result<Order, StoreError> {
        let row = match record.id {
            None => {
                sqlx::query_as::<_, OrderRow>(
                    r"
                    INSERT INTO customer_order (customer_name, order_date, shipping_address, total)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, customer_name, order_date, shipping_address, total
                    ",
                )
                .bind(&record.customer_name)
                .bind(record.order_date)
                .bind(&record.shipping_address)
                .bind(record.total)
                .fetch_one(&self.pool)
                .await?
            }
            // The row is expected to exist; if it vanished between the
            // caller's existence check and this write, the empty result
            // surfaces as a database error.
            Some(id) => {
                sqlx::query_as::<_, OrderRow>(
                    r"
                    UPDATE customer_order
                    SET customer_name = $2,
                        order_date = $3,
                        shipping_address = $4,
                        total = $5
                    WHERE id = $1
                    RETURNING id, customer_name, order_date, shipping_address, total
                    ",
                )
                .bind(id)
                .bind(&record.customer_name)
                .bind(record.order_date)
                .bind(&record.shipping_address)
                .bind(record.total)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: OrderId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM customer_order WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
