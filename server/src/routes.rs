use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::settings::hide_completed;
use crate::store::{Attributes, SavedObject, TODO_TYPE};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub item: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub item: String,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    pub success: bool,
    pub deleted: Value,
}

// No access control on any route yet; every endpoint is public.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}

fn todo_attributes(item: String, completed: Option<bool>) -> Attributes {
    let mut attrs = Attributes::new();
    attrs.insert("item".to_string(), Value::String(item));
    if let Some(completed) = completed {
        attrs.insert("completed".to_string(), Value::Bool(completed));
    }
    attrs
}

fn is_open(todo: &SavedObject) -> bool {
    todo.attributes.get("completed") == Some(&Value::Bool(false))
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<SavedObject>>, ApiError> {
    let hide = hide_completed(state.settings.as_ref()).await?;
    let mut todos = state.store.find(TODO_TYPE).await?;
    if hide {
        todos.retain(is_open);
    }
    tracing::debug!(count = todos.len(), hide_completed = hide, "listed todos");
    Ok(Json(todos))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SavedObject>, ApiError> {
    let todo = state.store.get(TODO_TYPE, &id).await?;
    Ok(Json(todo))
}

async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<Json<SavedObject>, ApiError> {
    let Json(input) = payload?;
    if input.item.is_empty() {
        return Err(ApiError::validation(
            "[request body.item]: value must not be empty",
        ));
    }
    let todo = state
        .store
        .create(TODO_TYPE, todo_attributes(input.item, Some(false)))
        .await?;
    tracing::info!(id = %todo.id, "created todo");
    Ok(Json(todo))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<SavedObject>, ApiError> {
    let Json(input) = payload?;
    // `completed` is only ever written as true; false or absent leaves it as stored.
    let completed = input.completed.filter(|done| *done);
    let todo = state
        .store
        .update(TODO_TYPE, &id, todo_attributes(input.item, completed))
        .await?;
    tracing::info!(%id, completed = completed.is_some(), "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteTodoResponse>, ApiError> {
    let deleted = state.store.delete(TODO_TYPE, &id).await?;
    tracing::info!(%id, "deleted todo");
    Ok(Json(DeleteTodoResponse {
        success: true,
        deleted,
    }))
}
