//! Page state for the todo list.
//!
//! Every user action is a `begin_*` / `finish_*` pair. `begin_*` returns the
//! request for the host to send; `finish_*` takes the host's response and is
//! the only place the local list changes. A failed response leaves the list
//! as it was and hands the error back to the host.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, TodoItem, UpdateTodo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
    /// The one load attempt failed; the list stays empty.
    Failed,
}

/// State of one mounted todo page: the local list, the new-item draft and
/// whether a create is outstanding.
#[derive(Debug, Clone)]
pub struct TodoApp {
    client: TodoClient,
    load: LoadState,
    todos: Vec<TodoItem>,
    draft: String,
    adding: bool,
}

impl TodoApp {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            load: LoadState::NotLoaded,
            todos: Vec::new(),
            draft: String::new(),
            adding: false,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// True while a create request is outstanding.
    pub fn is_adding(&self) -> bool {
        self.adding
    }

    /// The initial list fetch. Only the first call per page returns a request.
    pub fn begin_load(&mut self) -> Option<HttpRequest> {
        if self.load != LoadState::NotLoaded {
            return None;
        }
        self.load = LoadState::Loading;
        Some(self.client.build_list_todos())
    }

    pub fn finish_load(&mut self, response: HttpResponse) -> Result<(), ClientError> {
        match self.client.parse_list_todos(response) {
            Ok(envelopes) => {
                self.todos = envelopes.into_iter().map(TodoItem::from).collect();
                self.load = LoadState::Loaded;
                debug!(count = self.todos.len(), "loaded todos");
                Ok(())
            }
            Err(err) => {
                self.load = LoadState::Failed;
                warn!(error = %err, "loading todos failed");
                Err(err)
            }
        }
    }

    /// Sends the trimmed draft as a new todo and clears the draft.
    ///
    /// A blank draft is a `ClientError::Validation` and leaves the draft as
    /// it was. Returns `Ok(None)` while a previous create has not answered.
    pub fn begin_add(&mut self) -> Result<Option<HttpRequest>, ClientError> {
        if self.adding {
            debug!("create already in flight");
            return Ok(None);
        }
        let item = self.draft.trim();
        if item.is_empty() {
            return Err(ClientError::Validation(
                "todo text must not be blank".to_string(),
            ));
        }
        let request = self.client.build_create_todo(&CreateTodo {
            item: item.to_string(),
        })?;
        self.draft.clear();
        self.adding = true;
        Ok(Some(request))
    }

    pub fn finish_add(&mut self, response: HttpResponse) -> Result<&TodoItem, ClientError> {
        self.adding = false;
        let envelope = self
            .client
            .parse_create_todo(response)
            .inspect_err(|err| warn!(error = %err, "adding todo failed"))?;
        self.todos.push(TodoItem::from(envelope));
        Ok(&self.todos[self.todos.len() - 1])
    }

    /// Inline text edit. Only the text is sent.
    pub fn begin_edit(&self, id: &str, item: &str) -> Result<HttpRequest, ClientError> {
        self.client.build_update_todo(
            id,
            &UpdateTodo {
                item: item.to_string(),
                completed: None,
            },
        )
    }

    /// Replaces the local item with the server's copy. If the response carries
    /// no `completed` flag the local one is kept.
    pub fn finish_edit(&mut self, id: &str, response: HttpResponse) -> Result<(), ClientError> {
        let envelope = self
            .client
            .parse_update_todo(response)
            .inspect_err(|err| warn!(%id, error = %err, "editing todo failed"))?;
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed = envelope.attributes.completed.unwrap_or(todo.completed);
            todo.item = envelope.attributes.item;
            todo.id = envelope.id;
        }
        Ok(())
    }

    pub fn begin_complete(&self, id: &str, item: &str) -> Result<HttpRequest, ClientError> {
        self.client.build_update_todo(
            id,
            &UpdateTodo {
                item: item.to_string(),
                completed: Some(true),
            },
        )
    }

    pub fn finish_complete(&mut self, id: &str, response: HttpResponse) -> Result<(), ClientError> {
        let envelope = self
            .client
            .parse_update_todo(response)
            .inspect_err(|err| warn!(%id, error = %err, "completing todo failed"))?;
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            *todo = TodoItem::from(envelope);
        }
        Ok(())
    }

    pub fn begin_delete(&self, id: &str) -> HttpRequest {
        self.client.build_delete_todo(id)
    }

    pub fn finish_delete(&mut self, id: &str, response: HttpResponse) -> Result<(), ClientError> {
        self.client
            .parse_delete_todo(response)
            .inspect_err(|err| warn!(%id, error = %err, "deleting todo failed"))?;
        self.todos.retain(|todo| todo.id != id);
        Ok(())
    }
}
