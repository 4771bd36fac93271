//! What the page renders: one row per todo plus a static message catalog.

use crate::state::TodoApp;
use crate::types::TodoItem;

const MESSAGES: &[(&str, &str)] = &[
    ("todoList.pageTitle", "Todo List Plugin"),
    ("todoList.addPlaceholder", "Add new todo"),
    ("todoList.addButton", "Add"),
    ("todoList.updatePlaceholder", "Update todo"),
    ("todoList.updateButton", "Update"),
    ("todoList.completeButton", "Complete"),
    ("todoList.completedButton", "Completed"),
    ("todoList.deleteButton", "Delete"),
];

fn lookup(id: &str) -> Option<&'static str> {
    MESSAGES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, text)| *text)
}

/// Default English text for a message id. Unknown ids render as themselves.
pub fn message(id: &str) -> &str {
    lookup(id).unwrap_or(id)
}

/// One rendered line of the list: the item text and its action states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: String,
    pub item: String,
    /// Completed items cannot be edited inline.
    pub read_only: bool,
    pub complete_label: &'static str,
    pub complete_enabled: bool,
    pub edit_aria_label: String,
}

impl From<&TodoItem> for TodoRow {
    fn from(todo: &TodoItem) -> Self {
        let complete_key = if todo.completed {
            "todoList.completedButton"
        } else {
            "todoList.completeButton"
        };
        Self {
            id: todo.id.clone(),
            item: todo.item.clone(),
            read_only: todo.completed,
            complete_label: lookup(complete_key).unwrap_or(complete_key),
            complete_enabled: !todo.completed,
            edit_aria_label: format!("Edit todo item: {}", todo.item),
        }
    }
}

impl TodoApp {
    /// Rows in list order. Delete is always offered, so it has no flag.
    pub fn rows(&self) -> Vec<TodoRow> {
        self.todos().iter().map(TodoRow::from).collect()
    }

    /// The add button only does something for a non-blank draft.
    pub fn can_add(&self) -> bool {
        !self.is_adding() && !self.draft().trim().is_empty()
    }
}
