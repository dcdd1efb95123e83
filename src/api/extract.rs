//! Request extractors.
//!
//! Each rejects with [`AppError`] rather than axum's plain-text rejections, so
//! every failure reaches the client as the JSON error envelope.

use std::convert::Infallible;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::api::dto::ListParams;
use crate::error::AppError;

/// JSON body that has been deserialized and passed `validator` checks.
///
/// Malformed JSON, wrong field types and failed validation rules all reject
/// with [`AppError::Validation`], so handlers only ever see well-formed input.
///
/// ```rust,ignore
/// pub async fn create(ValidatedJson(body): ValidatedJson<ProjectRequest>) { ... }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Numeric `{id}` path segment.
///
/// An id that is not a valid `i64` cannot name a stored row, so it rejects
/// with [`AppError::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i64);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

/// Listing parameters never reject: unparsable input falls back to defaults.
impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ListParams::from_query_str(parts.uri.query().unwrap_or_default()))
    }
}
