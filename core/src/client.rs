//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Any 2xx status counts as success; every endpoint currently answers 200.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, DeleteResponse, TodoEnvelope, UpdateTodo};

const TODOS_PATH: &str = "/api/todos";

/// Characters escaped when an id is placed in a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Stateless request builder and response parser for the todo API.
///
/// Never touches the network; the caller executes each request between
/// `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{TODOS_PATH}", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!(
            "{}{TODOS_PATH}/{}",
            self.base_url,
            utf8_percent_encode(id, SEGMENT)
        )
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_todo(&self, id: &str) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ClientError> {
        Ok(HttpRequest::json(
            HttpMethod::Post,
            self.collection_url(),
            to_body(input)?,
        ))
    }

    pub fn build_update_todo(
        &self,
        id: &str,
        input: &UpdateTodo,
    ) -> Result<HttpRequest, ClientError> {
        Ok(HttpRequest::json(
            HttpMethod::Put,
            self.item_url(id),
            to_body(input)?,
        ))
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<TodoEnvelope>, ClientError> {
        parse_ok(response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<TodoEnvelope, ClientError> {
        parse_ok(response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<TodoEnvelope, ClientError> {
        parse_ok(response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<TodoEnvelope, ClientError> {
        parse_ok(response)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<DeleteResponse, ClientError> {
        parse_ok(response)
    }
}

fn to_body<T: Serialize>(input: &T) -> Result<String, ClientError> {
    serde_json::to_string(input).map_err(|e| ClientError::Serialization(e.to_string()))
}

fn parse_ok<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ClientError> {
    if !response.is_success() {
        return Err(ClientError::from_response(&response));
    }
    serde_json::from_str(&response.body).map_err(|e| ClientError::Deserialization(e.to_string()))
}
