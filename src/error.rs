//! Typed errors and HTTP mapping.
//!
//! Bodies follow the `detail` wire format existing produto clients read:
//! `{"detail": "<message>"}`, or `{"detail": [{loc, msg, type}, ...]}` for validation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Message returned for every id-addressed operation on a missing row.
pub const PRODUTO_NAO_ENCONTRADO: &str = "Produto não encontrado";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("request validation failed")]
    Validation(Vec<FieldError>),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn produto_not_found() -> Self {
        AppError::NotFound(PRODUTO_NAO_ENCONTRADO.to_string())
    }

    pub fn invalid(error: FieldError) -> Self {
        AppError::Validation(vec![error])
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// One rejected input. `loc` is the location path, e.g. `["body", "preco"]`.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        FieldError {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// A body field, located as `["body", field]`.
    pub fn body(field: &str, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::new(&["body", field], msg, kind)
    }

    /// Last segment of `loc`: the field name.
    pub fn field(&self) -> &str {
        self.loc.last().map(String::as_str).unwrap_or("")
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub detail: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Validation(detail) => (status, Json(ValidationErrorBody { detail })).into_response(),
            AppError::Db(e) => {
                tracing::error!(error = %e, "unhandled database error");
                let body = ErrorBody {
                    detail: "Internal Server Error".into(),
                };
                (status, Json(body)).into_response()
            }
            other => (status, Json(ErrorBody { detail: other.to_string() })).into_response(),
        }
    }
}
