//! JSON body extractor that runs the request validator before the handler.

use crate::error::{AppError, FieldError};
use crate::service::{InputSchema, RequestValidator};
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
};
use serde_json::Value;

/// Body deserialized into `T` after every field rule passed.
///
/// A body without `Content-Type` is read as JSON. Any other non-JSON media type
/// is a validation error, as is malformed JSON.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: InputSchema,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_body = accepts_json(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(from_bytes_rejection)?;
        if !json_body {
            return Err(AppError::invalid(FieldError::new(
                &["body"],
                "body must be sent as application/json",
                "type_error.dict",
            )));
        }
        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::invalid(FieldError::new(&["body"], e.to_string(), "value_error.jsondecode"))
        })?;
        RequestValidator::parse(body).map(ValidatedJson)
    }
}

/// True when `Content-Type` is absent, `application/json` or an `application/*+json` type.
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn from_bytes_rejection(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::invalid(FieldError::new(&["body"], rejection.body_text(), "value_error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: Option<&'static str>) -> HeaderMap {
        let mut h = HeaderMap::new();
        if let Some(ct) = content_type {
            h.insert(CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        h
    }

    #[test]
    fn json_media_types_are_accepted() {
        assert!(accepts_json(&headers(None)));
        assert!(accepts_json(&headers(Some("application/json"))));
        assert!(accepts_json(&headers(Some("Application/JSON; charset=utf-8"))));
        assert!(accepts_json(&headers(Some("application/vnd.api+json"))));
    }

    #[test]
    fn other_media_types_are_refused() {
        assert!(!accepts_json(&headers(Some("text/plain"))));
        assert!(!accepts_json(&headers(Some("application/x-www-form-urlencoded"))));
    }
}
