//! Like handler

use axum::{extract::State, Json};
use gallery_service::{LikeResponse, LikeService};

use crate::extractors::PathParam;
use crate::response::ApiResult;
use crate::state::AppState;

/// Increment an image's like counter
///
/// POST /api/images/:id/like
pub async fn like_image(
    State(state): State<AppState>,
    PathParam(image_id): PathParam<String>,
) -> ApiResult<Json<LikeResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service.like_image(&image_id).await?;
    Ok(Json(response))
}
