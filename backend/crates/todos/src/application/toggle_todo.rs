//! Toggle To-do Use Case
//!
//! Flips the `done` flag of one item.

use std::sync::Arc;

use kernel::id::{AccountId, TodoItemId};

use crate::domain::repository::AccountRepository;
use crate::error::TodoResult;

/// How the client names the item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleTarget {
    /// Stable item id
    Id(TodoItemId),
    /// 1-based display position
    Position(usize),
}

pub struct ToggleTodoUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
}

impl<A> ToggleTodoUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>) -> Self {
        Self { account_repo }
    }

    /// Returns the item's new `done` value
    pub async fn execute(&self, account_id: &AccountId, target: ToggleTarget) -> TodoResult<bool> {
        let done = self
            .account_repo
            .modify_todos(account_id, move |todos| match target {
                ToggleTarget::Id(item_id) => todos.toggle_by_id(&item_id),
                ToggleTarget::Position(index) => todos.toggle_at(index),
            })
            .await?;

        tracing::debug!(account_id = %account_id, ?target, done, "To-do toggled");
        Ok(done)
    }
}
