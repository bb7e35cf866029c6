//! In-memory order store for tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use order_management_core::{Order, OrderId, OrderRecord};

use super::{OrderStore, StoreError};

/// Thread-safe in-memory store.
///
/// Each call holds the lock for its full duration, so individual
/// operations are atomic; concurrent writers to the same id race with
/// last-write-wins, matching the service's concurrency contract.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    orders: HashMap<i64, Order>,
    next_id: i64,
}

impl InMemoryOrderStore {
    /// Create an empty store. The first inserted order gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.orders.get(&id.as_i64()).cloned())
    }

    async fn save(&self, record: OrderRecord) -> Result<Order, StoreError> {
        let mut inner = self.inner.write().map_err(poisoned)?;

        let id = match record.id {
            Some(id) => id,
            None => {
                inner.next_id += 1;
                OrderId::new(inner.next_id)
            }
        };

        let order = Order {
            id,
            customer_name: record.customer_name,
            order_date: record.order_date,
            shipping_address: record.shipping_address,
            total: record.total,
        };
        inner.orders.insert(id.as_i64(), order.clone());

        Ok(order)
    }

    async fn delete_by_id(&self, id: OrderId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        inner.orders.remove(&id.as_i64());
        Ok(())
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn record(name: &str) -> OrderRecord {
        OrderRecord {
            id: None,
            customer_name: name.to_string(),
            order_date: Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
            shipping_address: "123 Main St".to_string(),
            total: Decimal::new(1000, 1),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let store = InMemoryOrderStore::new();

        let first = store.save(record("John Doe")).await.unwrap();
        let second = store.save(record("Jane Smith")).await.unwrap();

        assert_eq!(first.id, OrderId::new(1));
        assert_eq!(second.id, OrderId::new(2));
    }

    #[tokio::test]
    async fn test_save_then_find_round_trips() {
        let store = InMemoryOrderStore::new();

        let saved = store.save(record("John Doe")).await.unwrap();
        let found = store.find_by_id(saved.id).await.unwrap().unwrap();

        assert_eq!(found, saved);
        assert_eq!(found.customer_name, "John Doe");
        assert_eq!(
            found.order_date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
        assert_eq!(found.shipping_address, "123 Main St");
        assert_eq!(found.total, Decimal::new(1000, 1));
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites_in_place() {
        let store = InMemoryOrderStore::new();
        let saved = store.save(record("John Doe")).await.unwrap();

        let updated = store
            .save(OrderRecord {
                id: Some(saved.id),
                customer_name: "Jane Smith".to_string(),
                order_date: saved.order_date,
                shipping_address: "456 Elm St".to_string(),
                total: Decimal::new(2000, 1),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, saved.id);
        let found = store.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.customer_name, "Jane Smith");
        assert_eq!(found.total, Decimal::new(2000, 1));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store = InMemoryOrderStore::new();

        assert!(
            store
                .find_by_id(OrderId::new(999))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete_then_find_absent() {
        let store = InMemoryOrderStore::new();
        let saved = store.save(record("John Doe")).await.unwrap();

        store.delete_by_id(saved.id).await.unwrap();

        assert!(store.find_by_id(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let store = InMemoryOrderStore::new();

        store.delete_by_id(OrderId::new(999)).await.unwrap();
    }
}
