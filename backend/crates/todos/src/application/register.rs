//! Register Use Case
//!
//! Creates an account and signs the client in as it.

use std::sync::Arc;

use crate::application::config::TodoConfig;
use crate::application::session_gate::SessionGate;
use crate::domain::entity::account::Account;
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::domain::value_object::{
    password::{RawPassword, UserPassword},
    username::Username,
};
use crate::error::{TodoError, TodoResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    /// Session token for cookie
    pub session_token: String,
    pub username: Username,
}

/// Register use case
pub struct RegisterUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    account_repo: Arc<A>,
    gate: SessionGate<S>,
    config: Arc<TodoConfig>,
}

impl<A, S> RegisterUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    pub fn new(account_repo: Arc<A>, session_repo: Arc<S>, config: Arc<TodoConfig>) -> Self {
        Self {
            account_repo,
            gate: SessionGate::new(session_repo, config.clone()),
            config,
        }
    }

    pub async fn execute(
        &self,
        input: RegisterInput,
        previous_token: Option<&str>,
    ) -> TodoResult<RegisterOutput> {
        let username = Username::new(&input.username)
            .map_err(|e| TodoError::InvalidUsername(e.to_string()))?;

        let raw_password = RawPassword::new(input.password, &self.config.password_policy)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let account = Account::new(username, password_hash);
        self.account_repo.create(&account).await?;

        let (session, session_token) = self
            .gate
            .start(account.account_id, account.username.clone(), previous_token)
            .await?;

        tracing::info!(
            account_id = %account.account_id,
            session_id = %session.session_id,
            username = %account.username,
            "Account registered"
        );

        Ok(RegisterOutput {
            session_token,
            username: account.username,
        })
    }
}
