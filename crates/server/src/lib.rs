//! Order management server library.
//!
//! This crate provides the service as a library, allowing the HTTP surface
//! to be exercised by integration tests without a running binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
