//! Order resource route handlers.
//!
//! Translates HTTP requests into store operations: validation failures
//! become a 400 with the ordered list of messages, a missing id becomes an
//! empty 404, and everything else flows through [`AppError`]'s blanket
//! 400 boundary.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use order_management_core::{FieldError, Order, OrderDraft, OrderId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Fetch a single order by id.
#[instrument(skip(state))]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Order>> {
    let order = state
        .store()
        .find_by_id(OrderId::new(id))
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(order))
}

/// Create a new order.
///
/// Validation runs before the store is touched; a failed draft never
/// causes a write.
#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<OrderDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>)> {
    let draft = read_draft(payload)?;
    let record = draft.validate().map_err(validation_error)?;

    let order = state.store().save(record).await?;
    tracing::info!(id = %order.id, "order created");

    Ok((StatusCode::CREATED, Json(order)))
}

/// Update an existing order.
///
/// The existence check runs first, so a bad payload against a missing id
/// is still a 404. The stored order date survives the overwrite; only the
/// customer name, shipping address and total come from the payload.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<OrderDraft>, JsonRejection>,
) -> Result<Json<Order>> {
    let draft = read_draft(payload)?;

    let existing = state
        .store()
        .find_by_id(OrderId::new(id))
        .await?
        .ok_or(AppError::NotFound)?;

    let mut record = draft.validate().map_err(validation_error)?;
    record.id = Some(existing.id);
    record.order_date = existing.order_date;

    let order = state.store().save(record).await?;
    tracing::info!(id = %order.id, "order updated");

    Ok(Json(order))
}

/// Delete an order.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    let id = OrderId::new(id);
    state
        .store()
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    state.store().delete_by_id(id).await?;
    tracing::info!(%id, "order deleted");

    Ok(StatusCode::OK)
}

/// Unwrap an extracted JSON body, routing parse failures through the
/// blanket 400-with-message boundary.
fn read_draft(
    payload: std::result::Result<Json<OrderDraft>, JsonRejection>,
) -> Result<OrderDraft> {
    let Json(draft) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(draft)
}

fn validation_error(errors: Vec<FieldError>) -> AppError {
    AppError::Validation(errors.iter().map(ToString::to_string).collect())
}
