//! HTTP transport types for the host-does-IO pattern.
//!
//! Requests and responses are plain data: the core builds `HttpRequest`
//! values and parses `HttpResponse` values, and the host performs the I/O.

pub const CONTENT_TYPE_JSON: (&str, &str) = ("content-type", "application/json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A request for the host to execute. `url` is absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn empty(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn json(method: HttpMethod, url: String, body: String) -> Self {
        let (key, value) = CONTENT_TYPE_JSON;
        Self {
            method,
            url,
            headers: vec![(key.to_string(), value.to_string())],
            body: Some(body),
        }
    }
}

/// What the host got back after executing an `HttpRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
