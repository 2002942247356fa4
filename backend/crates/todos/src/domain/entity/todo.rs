//! To-do Entities
//!
//! An account's list is an ordered sequence of items. Order is insertion
//! order; an item's display position is its 1-based index. Items also
//! carry a stable id so a client can address them without trusting a
//! position that may have shifted.

use chrono::{DateTime, Utc};
use kernel::id::TodoItemId;

use crate::domain::value_object::description::Description;
use crate::error::{TodoError, TodoResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub item_id: TodoItemId,
    pub description: Description,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    pub fn new(description: Description) -> Self {
        Self {
            item_id: TodoItemId::new(),
            description,
            done: false,
            created_at: Utc::now(),
        }
    }

    /// Flip `done` and return the new value
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new, not-done item and return a reference to it
    pub fn push(&mut self, description: Description) -> &TodoItem {
        self.items.push(TodoItem::new(description));
        &self.items[self.items.len() - 1]
    }

    /// Toggle the item at a 1-based position
    pub fn toggle_at(&mut self, index: usize) -> TodoResult<bool> {
        let len = self.items.len();
        if index == 0 || index > len {
            return Err(TodoError::IndexOutOfRange { index, len });
        }
        Ok(self.items[index - 1].toggle())
    }

    /// Toggle the item with the given id
    pub fn toggle_by_id(&mut self, item_id: &TodoItemId) -> TodoResult<bool> {
        self.items
            .iter_mut()
            .find(|item| &item.item_id == item_id)
            .map(TodoItem::toggle)
            .ok_or(TodoError::ItemNotFound)
    }

    /// Remove done items, keeping the relative order of the rest
    ///
    /// Returns the number of removed items.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.done);
        before - self.items.len()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
