//! Check Session Use Case
//!
//! Resolves a session token to the account it belongs to.

use std::sync::Arc;

use kernel::id::{AccountId, SessionId};

use crate::application::config::TodoConfig;
use crate::application::session_gate::SessionGate;
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::domain::value_object::username::Username;
use crate::error::{TodoError, TodoResult};

/// The signed-in account behind a request
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub session_id: SessionId,
    pub account_id: AccountId,
    pub username: Username,
}

/// Check session use case
pub struct CheckSessionUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    account_repo: Arc<A>,
    gate: SessionGate<S>,
}

impl<A, S> CheckSessionUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    pub fn new(account_repo: Arc<A>, session_repo: Arc<S>, config: Arc<TodoConfig>) -> Self {
        Self {
            account_repo,
            gate: SessionGate::new(session_repo, config),
        }
    }

    /// Check the token and return the current account
    pub async fn execute(&self, session_token: &str) -> TodoResult<CurrentAccount> {
        let session = self.gate.resolve(session_token).await?;

        if self
            .account_repo
            .find_by_id(&session.account_id)
            .await?
            .is_none()
        {
            self.gate.discard(&session.session_id).await?;
            return Err(TodoError::NotAuthenticated);
        }

        Ok(CurrentAccount {
            session_id: session.session_id,
            account_id: session.account_id,
            username: session.username,
        })
    }
}
