//! Form DTOs
//!
//! htmx submits `application/x-www-form-urlencoded` bodies. Missing fields
//! default to empty so validation, not extraction, reports them.

use kernel::id::TodoItemId;
use serde::Deserialize;

use crate::application::toggle_todo::ToggleTarget;
use crate::error::{TodoError, TodoResult};

/// Sign-in and registration form
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoForm {
    #[serde(default)]
    pub description: String,
}

/// Toggle request: `id` (item UUID) is preferred, `i` (1-based position)
/// is accepted when no id is sent
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToggleForm {
    pub id: Option<String>,
    pub i: Option<String>,
}

impl ToggleForm {
    pub fn target(&self) -> TodoResult<ToggleTarget> {
        if let Some(id) = non_empty(&self.id) {
            let item_id: TodoItemId = id.parse().map_err(|_| TodoError::ItemNotFound)?;
            return Ok(ToggleTarget::Id(item_id));
        }

        match non_empty(&self.i) {
            // Positions that are negative or not numbers can never exist
            Some(i) => Ok(ToggleTarget::Position(i.parse().unwrap_or(0))),
            None => Err(TodoError::ItemNotFound),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
