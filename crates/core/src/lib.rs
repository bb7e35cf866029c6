//! Order Management Core - shared types library.
//!
//! This crate provides the domain types for the order management service:
//! the typed order id, the persisted [`Order`] record, the inbound
//! [`OrderDraft`] payload, and the validation rules a draft must satisfy
//! before it reaches the store.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP. The optional `postgres` feature adds sqlx
//! trait impls for [`OrderId`] so the server can bind it directly in
//! queries.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrapper for the type-safe order id
//! - [`order`] - The order record, the draft payload, and validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod order;
pub mod types;

pub use order::{FieldError, Order, OrderDraft, OrderRecord};
pub use types::OrderId;
