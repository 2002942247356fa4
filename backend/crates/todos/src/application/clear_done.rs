//! Clear Done Use Case
//!
//! Removes completed items and keeps the result.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entity::todo::TodoList;
use crate::domain::repository::AccountRepository;
use crate::error::TodoResult;

pub struct ClearDoneOutput {
    pub removed: usize,
    pub todos: TodoList,
}

pub struct ClearDoneUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
}

impl<A> ClearDoneUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>) -> Self {
        Self { account_repo }
    }

    pub async fn execute(&self, account_id: &AccountId) -> TodoResult<ClearDoneOutput> {
        let output = self
            .account_repo
            .modify_todos(account_id, |todos| {
                let removed = todos.clear_completed();
                Ok(ClearDoneOutput {
                    removed,
                    todos: todos.clone(),
                })
            })
            .await?;

        if output.removed > 0 {
            tracing::info!(account_id = %account_id, removed = output.removed, "Cleared done to-dos");
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create_todo::{CreateTodoInput, CreateTodoUseCase};
    use crate::application::list_todos::ListTodosUseCase;
    use crate::application::toggle_todo::{ToggleTarget, ToggleTodoUseCase};
    use crate::domain::entity::account::Account;
    use crate::domain::value_object::password::{RawPassword, UserPassword};
    use crate::domain::value_object::username::Username;
    use crate::infra::memory::MemoryStore;
    use platform::password::PasswordPolicy;

    #[tokio::test]
    async fn test_clear_done_persists() {
        let store = MemoryStore::new();
        let raw = RawPassword::new("pw1".to_string(), &PasswordPolicy::default()).unwrap();
        let account = Account::new(
            Username::new("alice").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        );
        AccountRepository::create(&store, &account).await.unwrap();
        let account_id = account.account_id;
        let repo = Arc::new(store);

        let create = CreateTodoUseCase::new(repo.clone());
        for d in ["a", "b", "c", "d", "e"] {
            create
                .execute(
                    &account_id,
                    CreateTodoInput {
                        description: d.to_string(),
                    },
                )
                .await
                .unwrap();
        }
        let toggle = ToggleTodoUseCase::new(repo.clone());
        toggle.execute(&account_id, ToggleTarget::Position(2)).await.unwrap();
        toggle.execute(&account_id, ToggleTarget::Position(4)).await.unwrap();

        let output = ClearDoneUseCase::new(repo.clone())
            .execute(&account_id)
            .await
            .unwrap();
        assert_eq!(output.removed, 2);

        let listed = ListTodosUseCase::new(repo).execute(&account_id).await.unwrap();
        let descriptions: Vec<_> = listed.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(descriptions, ["a", "c", "e"]);
        assert_eq!(listed, output.todos);
    }
}
