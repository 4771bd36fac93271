use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::settings::SettingsError;
use crate::store::StoreError;

/// Error body returned for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub error: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation { status: StatusCode, message: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { status, .. } => *status,
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::UnsupportedType(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Internal(_)) | ApiError::Settings(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        let body = ErrorBody {
            status_code: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_http_status() {
        let not_found = ApiError::from(StoreError::NotFound {
            object_type: "todo".into(),
            id: "x".into(),
        });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(StoreError::UnsupportedType("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::Internal("disk".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_body_uses_camel_case() {
        let body = ErrorBody {
            status_code: 404,
            error: "Not Found".into(),
            message: "Saved object [todo/x] not found".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["error"], "Not Found");
    }
}
