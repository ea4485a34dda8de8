//! Body extractor accepting either JSON or an urlencoded form.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Deserializes the body as `application/x-www-form-urlencoded` when the
/// request says so, and as JSON otherwise (regardless of `Content-Type`).
///
/// ```ignore
/// async fn create(JsonOrForm(input): JsonOrForm<CreateSuggestion>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|err| AppError::BadRequest(format!("Invalid JSON body: {err}")))?;
        Ok(Self(value))
    }
}
