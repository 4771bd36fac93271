//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the
//! todo does not exist" from "the server returned an unexpected status."
//! Other non-2xx responses land in `Http`. When the server sent its usual
//! `{statusCode, error, message}` body the message is extracted; otherwise
//! the raw body is kept for debugging.

use serde::Deserialize;

use crate::http::HttpResponse;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server returned 404.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Input rejected before any request was built.
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

#[derive(Deserialize)]
struct ServerErrorBody {
    message: String,
}

impl ClientError {
    pub fn from_response(response: &HttpResponse) -> Self {
        let message = serde_json::from_str::<ServerErrorBody>(&response.body)
            .map(|body| body.message)
            .unwrap_or_else(|_| response.body.clone());
        if response.status == 404 {
            ClientError::NotFound(message)
        } else {
            ClientError::Http {
                status: response.status,
                message,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_message_is_extracted() {
        let response = HttpResponse::new(
            404,
            r#"{"statusCode":404,"error":"Not Found","message":"Saved object [todo/x] not found"}"#,
        );
        let err = ClientError::from_response(&response);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: Saved object [todo/x] not found");
    }

    #[test]
    fn raw_body_is_kept_when_not_json() {
        let err = ClientError::from_response(&HttpResponse::new(502, "bad gateway"));
        assert!(matches!(
            err,
            ClientError::Http { status: 502, ref message } if message == "bad gateway"
        ));
    }
}
