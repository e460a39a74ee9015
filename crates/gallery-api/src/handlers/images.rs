//! Image listing handler

use axum::{extract::State, Json};
use gallery_service::{ImageService, ImagesResponse};

use crate::extractors::ImageListQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// List or search images, merged with local like counts
///
/// GET /api/images?q=&page=&perPage=
pub async fn list_images(
    State(state): State<AppState>,
    ImageListQuery(query): ImageListQuery,
) -> ApiResult<Json<ImagesResponse>> {
    let service = ImageService::new(state.service_context());
    let response = service.list_images(query).await?;
    Ok(Json(response))
}
