use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::auth;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /generate_token - issue a signed bearer token
pub async fn generate(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let token = auth::issue(&state.config)?;
    Ok(Json(json!({ "access_token": token })))
}
