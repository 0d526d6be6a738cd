//! Extractors whose rejections render through [`ApiError`].
//!
//! axum's own `Json` and `Path` reject with plain-text 422/400 bodies; these
//! wrappers turn every rejection into the JSON error body with status 400.

use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;

use crate::api::errors::ApiError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Numeric `:id` path segment
///
/// Deserializes as the bare `i64`, so `Path<EntityId>` reads the segment directly.
#[derive(Debug, Deserialize, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct EntityId(pub i64);
