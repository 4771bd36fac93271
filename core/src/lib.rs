//! Client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `TodoClient` is stateless: it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `TodoApp` layers the page state on top: the loaded list, the draft
//!   for a new item, and begin/finish pairs for every user action. Local
//!   state changes only once a response has been parsed successfully.
//! - `view` turns that state into rows and labels a renderer can draw.

pub mod client;
pub mod error;
pub mod http;
pub mod state;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{LoadState, TodoApp};
pub use types::{CreateTodo, DeleteResponse, TodoAttributes, TodoEnvelope, TodoItem, UpdateTodo};
pub use view::{message, TodoRow};
