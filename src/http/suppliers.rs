use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

use super::extract::Payload;
use super::response::{ApiError, Envelope};
use super::AppState;
use crate::integrity::SupplierRemoval;
use crate::model::{Supplier, SupplierPayload};

#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Supplier>>>, ApiError> {
    let suppliers = state.suppliers.list_suppliers().await?;
    Ok(Json(Envelope::ok(suppliers)))
}

#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Supplier>>, ApiError> {
    let supplier = state.suppliers.get_supplier(&id).await?;
    Ok(Json(Envelope::ok(supplier)))
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    Payload(payload): Payload<SupplierPayload>,
) -> Result<(StatusCode, Json<Envelope<Supplier>>), ApiError> {
    let supplier = state.suppliers.create_supplier(payload).await?;
    Ok((StatusCode::CREATED, Json(Envelope::ok(supplier))))
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(payload): Payload<SupplierPayload>,
) -> Result<Json<Envelope<Supplier>>, ApiError> {
    let supplier = state.suppliers.update_supplier(&id, payload).await?;
    Ok(Json(Envelope::ok(supplier)))
}

/// Deletes the supplier and every product referencing it.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<SupplierRemoval>>, ApiError> {
    let removal = state.cascade.delete_supplier(&id).await?;
    let msg = format!(
        "Supplier {} deleted along with {} related products",
        removal.supplier.id, removal.products.deleted_count
    );
    Ok(Json(Envelope::ok(removal).with_msg(msg)))
}
