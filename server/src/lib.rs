//! HTTP CRUD service for todo items.
//!
//! Routes translate requests into calls against an injected [`ObjectStore`]
//! and [`SettingsClient`]; neither the routes nor the state hold anything
//! across requests beyond those two handles.

pub mod config;
pub mod error;
pub mod routes;
pub mod settings;
pub mod store;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ErrorBody};
pub use settings::{MemorySettings, SettingDefinition, SettingsClient, HIDE_COMPLETED_ITEMS};
pub use store::{MemoryStore, ObjectStore, SavedObject, TODO_TYPE};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ObjectStore>,
    pub settings: Arc<dyn SettingsClient>,
}

impl AppState {
    pub fn new(store: Arc<dyn ObjectStore>, settings: Arc<dyn SettingsClient>) -> Self {
        Self { store, settings }
    }

    /// In-memory store and settings with the todo type and the
    /// `hide_completed_items` setting registered.
    pub fn in_memory(hide_completed: bool) -> Self {
        let store = MemoryStore::new().with_type(TODO_TYPE);
        let mut settings = MemorySettings::new();
        let mut definition = SettingDefinition::hide_completed_items();
        definition.default = serde_json::Value::Bool(hide_completed);
        settings.register(HIDE_COMPLETED_ITEMS, definition);
        Self::new(Arc::new(store), Arc::new(settings))
    }
}

pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

pub async fn run_until<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}
