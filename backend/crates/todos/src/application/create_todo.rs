//! Create To-do Use Case
//!
//! Appends a new, not-done item to the account's list.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entity::todo::TodoList;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::description::Description;
use crate::error::{TodoError, TodoResult};

pub struct CreateTodoInput {
    pub description: String,
}

pub struct CreateTodoUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
}

impl<A> CreateTodoUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>) -> Self {
        Self { account_repo }
    }

    /// Returns the list after the append
    pub async fn execute(
        &self,
        account_id: &AccountId,
        input: CreateTodoInput,
    ) -> TodoResult<TodoList> {
        let description = Description::new(&input.description)
            .map_err(|e| TodoError::InvalidDescription(e.to_string()))?;

        let todos = self
            .account_repo
            .modify_todos(account_id, move |todos| {
                todos.push(description);
                Ok(todos.clone())
            })
            .await?;

        tracing::info!(account_id = %account_id, items = todos.len(), "To-do created");
        Ok(todos)
    }
}
