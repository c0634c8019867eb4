use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::validate_product;

/// Hard-coded page window used to bound the listing loop. Deliberately
/// independent of the caller-supplied `per_page`; see DESIGN.md before
/// touching this.
const LISTING_WINDOW: i64 = 5;

const DEFAULT_PER_PAGE: i64 = 5;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub per_page: Option<String>,
}

impl ListQuery {
    /// Non-numeric values fall back to the default rather than erroring,
    /// so `?per_page=abc` paginates with the default window of 5.
    fn per_page(&self) -> i64 {
        self.per_page
            .as_deref()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PER_PAGE)
    }
}

/// GET /products - list the whole table as a sequence of page summaries.
///
/// The outer loop bound is `ceil(count / 5)` with the window fixed at 5,
/// while each summary paginates with the caller's `per_page`. An empty
/// table produces zero iterations and an empty array.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, ApiError> {
    let per_page = query.per_page();
    if per_page < 1 {
        let mut field_errors = HashMap::new();
        field_errors.insert(
            "per_page".to_string(),
            "Must be greater than or equal to 1.".to_string(),
        );
        return Err(ApiError::Validation(field_errors));
    }

    let total = state.store.count().await?;
    let page_count = if total % LISTING_WINDOW != 0 {
        total / LISTING_WINDOW + 1
    } else {
        total / LISTING_WINDOW
    };
    let total_pages = (total + per_page - 1) / per_page;

    let mut summaries = Vec::with_capacity(page_count as usize);
    for page in 1..=page_count {
        let products = state.store.page(page, per_page).await?;
        summaries.push(json!({
            "page": page,
            "per_page": per_page,
            "total_pages": total_pages,
            "total_items_in_page": products.len(),
            "products": products,
        }));
    }

    Ok(Json(Value::Array(summaries)))
}

/// GET /products/:id - show a single product by id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let product = state.store.fetch(id).await?;
    Ok(Json(json!(product)))
}

/// POST /products - validate and insert a new product
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let product = validate_product(&payload)?;
    state.store.create(product).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Product created successfully" })),
    ))
}

/// PUT /products/:id - validate and overwrite an existing product in place
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    // Absence wins over a bad payload: 404 before any validation 400
    state.store.fetch(id).await?;

    let product = validate_product(&payload)?;
    state.store.update(id, product).await?;

    Ok(Json(json!({ "message": "Product updated successfully" })))
}

/// DELETE /products/:id - remove a product by id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.store.delete(id).await?;
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
