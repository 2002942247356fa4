//! List To-dos Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entity::todo::TodoList;
use crate::domain::repository::AccountRepository;
use crate::error::{TodoError, TodoResult};

pub struct ListTodosUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
}

impl<A> ListTodosUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>) -> Self {
        Self { account_repo }
    }

    pub async fn execute(&self, account_id: &AccountId) -> TodoResult<TodoList> {
        self.account_repo
            .find_by_id(account_id)
            .await?
            .map(|account| account.todos)
            .ok_or(TodoError::NotAuthenticated)
    }
}
