//! HTTP route handlers for the order service.
//!
//! # Route Structure
//!
//! ```text
//! GET    /orders/{id}  - Fetch one order
//! POST   /orders       - Create an order
//! PUT    /orders/{id}  - Update an order
//! DELETE /orders/{id}  - Delete an order
//! ```

pub mod orders;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the order resource router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", post(orders::create)).route(
        "/{id}",
        get(orders::get_by_id)
            .put(orders::update)
            .delete(orders::remove),
    )
}

/// Create all routes for the service.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/orders", order_routes())
}
