//! Special dan handlers.

use axum::{Json, extract::rejection::JsonRejection};

use crate::api::handlers::read_body;
use crate::domain::{
    ApiResponse, CategoryDanRequest, HeadTailRequest, QuickDanRequest, SpecialDanResponse,
    TouchDanRequest,
};
use crate::error::Result;
use crate::service::dacbiet;

type Payload<T> = std::result::Result<Json<T>, JsonRejection>;

/// Members of one named category.
pub async fn quick(
    payload: Payload<QuickDanRequest>,
) -> Result<Json<ApiResponse<SpecialDanResponse>>> {
    let category = dacbiet::quick_from_request(&read_body(payload)?)?;
    let response = SpecialDanResponse::new(category.members()).with_filter(category);
    Ok(Json(ApiResponse::success(response)))
}

/// Head/tail product dan.
pub async fn head_tail(
    payload: Payload<HeadTailRequest>,
) -> Result<Json<ApiResponse<SpecialDanResponse>>> {
    let result = dacbiet::head_tail_from_request(&read_body(payload)?)?;
    Ok(Json(ApiResponse::success(SpecialDanResponse::new(result))))
}

/// Touch dan.
pub async fn touch(
    payload: Payload<TouchDanRequest>,
) -> Result<Json<ApiResponse<SpecialDanResponse>>> {
    let result = dacbiet::touch_from_request(&read_body(payload)?)?;
    Ok(Json(ApiResponse::success(SpecialDanResponse::new(result))))
}

/// Category dan.
pub async fn category(
    payload: Payload<CategoryDanRequest>,
) -> Result<Json<ApiResponse<SpecialDanResponse>>> {
    let result = dacbiet::category_from_request(&read_body(payload)?)?;
    Ok(Json(ApiResponse::success(SpecialDanResponse::new(result))))
}
