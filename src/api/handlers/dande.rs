//! Dan de generation handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

use crate::api::handlers::read_body;
use crate::api::state::AppState;
use crate::domain::{
    ApiResponse, Batch, Category, CategoryResponse, GenerateDanDeRequest, SpecialSetResponse,
    special_set,
};
use crate::error::Result;

/// Generate a dan de batch.
pub async fn generate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateDanDeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Batch>>> {
    let request = read_body(payload)?;

    let batch = state.dande_service.generate_from_request(&request)?;

    info!(
        quantity = batch.criteria.quantity,
        total_selected = batch.total_selected,
        "Dan de batch generated"
    );

    Ok(Json(ApiResponse::success(batch)))
}

/// List the special group table.
pub async fn special_sets() -> Json<ApiResponse<Vec<SpecialSetResponse>>> {
    let sets = special_set::table()
        .into_iter()
        .map(SpecialSetResponse::from)
        .collect();
    Json(ApiResponse::success(sets))
}

/// List the digit-class categories.
pub async fn categories() -> Json<ApiResponse<Vec<CategoryResponse>>> {
    let categories = Category::ALL
        .into_iter()
        .map(CategoryResponse::from)
        .collect();
    Json(ApiResponse::success(categories))
}
