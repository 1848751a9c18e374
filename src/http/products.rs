use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::instrument;

use super::extract::Payload;
use super::response::{ApiError, Envelope};
use super::AppState;
use crate::model::{Product, ProductPayload};

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub name: Option<String>,
}

#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<Envelope<Vec<Product>>>, ApiError> {
    let Query(query) = query?;
    let products = state.products.list_products(query.name.as_deref()).await?;
    Ok(Json(Envelope::ok(products)))
}

#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let product = state.products.get_product(&id).await?;
    Ok(Json(Envelope::ok(product)))
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    Payload(payload): Payload<ProductPayload>,
) -> Result<(StatusCode, Json<Envelope<Product>>), ApiError> {
    let product = state.products.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(Envelope::ok(product))))
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(payload): Payload<ProductPayload>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let product = state.products.update_product(&id, payload).await?;
    Ok(Json(Envelope::ok(product)))
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let product = state.products.delete_product(&id).await?;
    let msg = format!("Product {} deleted", product.id);
    Ok(Json(Envelope::ok(product).with_msg(msg)))
}
