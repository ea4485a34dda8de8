//! Handlers for the `/items` resource.
//!
//! Create and update take `multipart/form-data` with the text fields
//! `name`, `description`, `shippingMethod`, `boxQuantity` and an optional
//! `image` file part.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use glossary_core::error::CoreError;
use glossary_db::models::item::{CreateItem, ImageUpload, UpdateItem};
use glossary_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::query::ItemListParams;
use crate::response::{DataResponse, OkResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Multipart form
// ---------------------------------------------------------------------------

/// Item fields as submitted in a multipart form. Absent parts stay `None`.
#[derive(Debug, Default)]
struct ItemForm {
    name: Option<String>,
    description: Option<String>,
    shipping_method: Option<String>,
    box_quantity: Option<String>,
    image: Option<ImageUpload>,
}

/// Drain a multipart body into an [`ItemForm`].
///
/// A file part with no file name or no bytes counts as "no image".
async fn read_item_form(mut multipart: Multipart) -> AppResult<ItemForm> {
    let mut form = ItemForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "name" => form.name = Some(field.text().await?),
            "description" => form.description = Some(field.text().await?),
            "shippingMethod" => form.shipping_method = Some(field.text().await?),
            "boxQuantity" => form.box_quantity = Some(field.text().await?),
            "image" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let bytes = field.bytes().await?;
                if !file_name.is_empty() && !bytes.is_empty() {
                    form.image = Some(ImageUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

fn item_not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Item", id })
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// GET /api/items?q=
///
/// List items, optionally filtered by name or suggested name.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ItemListParams>,
) -> AppResult<impl IntoResponse> {
    let items = ItemRepo::list(&state.catalog, params.q.as_deref()).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/items/{id}
///
/// Retrieve an item with its suggestions.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let detail = ItemRepo::find_by_id(&state.catalog, &id)
        .await?
        .ok_or_else(|| item_not_found(id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/items
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = read_item_form(multipart).await?;
    let input = CreateItem {
        name: form.name.unwrap_or_default(),
        description: form.description,
        shipping_method: form.shipping_method,
        box_quantity: form.box_quantity,
    };

    let item = ItemRepo::create(&state.catalog, &input, form.image.as_ref()).await?;

    tracing::info!(
        item_id = %item.id,
        name = %item.name,
        image_file = ?item.image_file,
        "Item created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/items/{id}
///
/// Fields missing from the form keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = read_item_form(multipart).await?;
    let input = UpdateItem {
        name: form.name,
        description: form.description,
        shipping_method: form.shipping_method,
        box_quantity: form.box_quantity,
    };

    let item = ItemRepo::update(&state.catalog, &id, &input, form.image.as_ref())
        .await?
        .ok_or_else(|| item_not_found(id))?;

    tracing::info!(item_id = %item.id, image_file = ?item.image_file, "Item updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/items/{id}
///
/// Removes the item, its image and all of its suggestions.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !ItemRepo::delete(&state.catalog, &id).await? {
        return Err(item_not_found(id));
    }

    tracing::info!(item_id = %id, "Item deleted");

    Ok(Json(OkResponse::ok()))
}
