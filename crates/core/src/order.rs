//! The order record and the rules a candidate order must satisfy.
//!
//! Inbound payloads arrive as an [`OrderDraft`] with every field optional,
//! so a missing field surfaces as a validation error rather than a
//! deserialization failure. [`OrderDraft::validate`] turns a draft into an
//! [`OrderRecord`] ready for persistence, or into the ordered list of
//! [`FieldError`]s the HTTP layer reports back.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::OrderId;

/// A persisted order (domain type).
///
/// Every `Order` handed out by a store satisfies the field rules:
/// non-empty customer name, non-empty shipping address, positive total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order id, assigned by the store on insert.
    pub id: OrderId,
    /// Name of the ordering customer.
    pub customer_name: String,
    /// Date the order was placed, if recorded.
    pub order_date: Option<NaiveDate>,
    /// Free-form shipping address.
    pub shipping_address: String,
    /// Order total. Strictly positive.
    pub total: Decimal,
}

/// An inbound order payload, not yet validated.
///
/// Unknown fields (a client echoing `id`, say) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDraft {
    pub customer_name: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub shipping_address: Option<String>,
    pub total: Option<Decimal>,
}

/// A validated order on its way to the store.
///
/// Produced by [`OrderDraft::validate`]. `id` is `None` for a first insert
/// and `Some` when overwriting an existing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: Option<OrderId>,
    pub customer_name: String,
    pub order_date: Option<NaiveDate>,
    pub shipping_address: String,
    pub total: Decimal,
}

/// A validation failure tied to one order field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// JSON name of the offending field.
    pub field: &'static str,
    /// Human-readable message, surfaced verbatim to the client.
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl OrderDraft {
    /// Check the draft against the order field rules.
    ///
    /// Errors come back in field declaration order: customer name, then
    /// shipping address, then total. A missing field is treated the same
    /// as a blank one.
    ///
    /// # Errors
    ///
    /// Returns the ordered list of [`FieldError`]s when any rule fails.
    pub fn validate(self) -> Result<OrderRecord, Vec<FieldError>> {
        let customer_name = self.customer_name.unwrap_or_default();
        let shipping_address = self.shipping_address.unwrap_or_default();
        // A missing total defaults to zero, which fails the positive rule.
        let total = self.total.unwrap_or_default();

        let mut errors = Vec::new();
        if customer_name.trim().is_empty() {
            errors.push(FieldError::new("customerName", "Customer name is required"));
        }
        if shipping_address.trim().is_empty() {
            errors.push(FieldError::new(
                "shippingAddress",
                "Shipping address is required",
            ));
        }
        if total <= Decimal::ZERO {
            errors.push(FieldError::new("total", "Total must be a positive value"));
        }

        if errors.is_empty() {
            Ok(OrderRecord {
                id: None,
                customer_name,
                order_date: self.order_date,
                shipping_address,
                total,
            })
        } else {
            Err(errors)
        }
    }
}
