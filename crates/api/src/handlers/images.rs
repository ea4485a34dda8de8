//! Serving stored item images.

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use glossary_core::error::CoreError;
use glossary_core::naming::{image_content_type, served_file_name};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /product-img/{filename}
///
/// Only the last path component of `filename` is looked up; anything that
/// reduces to nothing usable is a 404, same as a missing file.
pub async fn serve(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Image",
            id: filename.clone(),
        })
    };

    let name = served_file_name(&filename).ok_or_else(not_found)?;
    let bytes = state
        .catalog
        .images()
        .read(name)
        .await?
        .ok_or_else(not_found)?;

    Ok(([(CONTENT_TYPE, image_content_type(name))], bytes))
}
