//! Core types for the order management service.

pub mod id;

pub use id::OrderId;
