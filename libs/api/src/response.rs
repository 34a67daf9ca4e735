use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;

use repository::RepositoryError;

pub enum ApiError {
    ClientError(String),
    NotFound(String),
    ServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::ClientError(message) => {
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status_code, Json(json!({ "detail": message }))).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict => {
                ApiError::ClientError(err.to_string())
            }
            RepositoryError::Db(source) => {
                error!("{:?}", source);
                ApiError::ServerError(
                    "database operation failed".to_string(),
                )
            }
        }
    }
}
