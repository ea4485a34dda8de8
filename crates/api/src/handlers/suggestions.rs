//! Handlers for the `/suggestions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use glossary_db::models::suggestion::CreateSuggestion;
use glossary_db::repositories::SuggestionRepo;

use crate::error::AppResult;
use crate::middleware::body::JsonOrForm;
use crate::response::{DataResponse, OkResponse};
use crate::state::AppState;

/// POST /api/suggestions
///
/// Accepts JSON or an urlencoded form with `itemId`, `suggestedName` and
/// `suggesterName`. Returns 404 when the item does not exist.
pub async fn create(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<CreateSuggestion>,
) -> AppResult<impl IntoResponse> {
    let suggestion = SuggestionRepo::create(&state.catalog, &input).await?;

    tracing::info!(
        suggestion_id = %suggestion.id,
        item_id = %suggestion.item_id,
        "Suggestion created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: suggestion })))
}

/// DELETE /api/suggestions/{id}
///
/// Idempotent: deleting an unknown id still answers 200.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let removed = SuggestionRepo::delete(&state.catalog, &id).await?;

    tracing::info!(suggestion_id = %id, removed, "Suggestion delete requested");

    Ok(Json(OkResponse::ok()))
}
