//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::shared::error::{AppError, ErrorCode};

/// JSON request body parsed regardless of `Content-Type`.
///
/// Anything that is not a JSON object is rejected with `INVALID_BODY`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(ErrorCode::InvalidBody, e.body_text()))?;

        let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|_| invalid_body())?;
        if !value.is_object() {
            return Err(invalid_body());
        }

        serde_json::from_value(value).map(JsonBody).map_err(|e| {
            AppError::bad_request(ErrorCode::InvalidBody, format!("Invalid request body: {}", e))
        })
    }
}

fn invalid_body() -> AppError {
    AppError::bad_request(ErrorCode::InvalidBody, "Invalid JSON or Content-Type")
}

/// Query string parsed into `T`, where a repeated key keeps its first value.
///
/// Failures are reported with `INVALID_QUERY` in the error envelope.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(ErrorCode::InvalidQuery, e.body_text()))?;

        let mut params = Map::new();
        for (key, value) in pairs {
            params.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(params))
            .map(QueryParams)
            .map_err(|e| {
                AppError::bad_request(ErrorCode::InvalidQuery, format!("Invalid query string: {}", e))
            })
    }
}
