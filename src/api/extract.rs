//! Request extractors with application error rejections.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError::Validation`].
///
/// Axum's own `Json` answers malformed bodies with `422` or `415` in plain
/// text; this wrapper reports them as `400` in the API error format.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
