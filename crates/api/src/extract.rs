//! Request extractors.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that also runs [`Validate`] on the parsed value.
///
/// Shape errors (missing fields, wrong types, values outside a closed
/// enumeration) reject with [`AppError::Json`]; constraint failures reject
/// with [`AppError::Validation`]. Both render as 422 with field detail.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateActivity>) -> AppResult<...> {
///     // `input` is well-formed and within its field limits here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
