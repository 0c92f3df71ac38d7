use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::client::ClientError;
use crate::loader::LoadError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    BadGateway(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(value: ClientError) -> Self {
        match value {
            ClientError::NotFound(_) => ApiError::NotFound(value.to_string()),
            ClientError::Status { status, .. } if status == StatusCode::NOT_FOUND => {
                ApiError::NotFound("Not found".into())
            }
            ClientError::Endpoint(err) => ApiError::BadRequest(err.to_string()),
            ClientError::Status { .. } | ClientError::Http(_) => {
                error!("API error: {value}");
                ApiError::BadGateway("Failed to fetch data".into())
            }
            ClientError::Url(err) => {
                error!("URL error: {err}");
                ApiError::Internal("Invalid API URL".into())
            }
        }
    }
}

impl From<LoadError> for ApiError {
    fn from(value: LoadError) -> Self {
        match value {
            LoadError::EmptyPath => ApiError::NotFound(value.to_string()),
            LoadError::InvalidProject(_) => ApiError::BadRequest(value.to_string()),
            LoadError::Client(err) => err.into(),
        }
    }
}
