//! Sign In Use Case
//!
//! Authenticates an existing account and creates a session.

use std::sync::Arc;

use crate::application::config::TodoConfig;
use crate::application::session_gate::SessionGate;
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::domain::value_object::{
    password::{RawPassword, UserPassword},
    username::Username,
};
use crate::error::{TodoError, TodoResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub username: Username,
}

/// Sign in use case
pub struct SignInUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    account_repo: Arc<A>,
    gate: SessionGate<S>,
    config: Arc<TodoConfig>,
}

impl<A, S> SignInUseCase<A, S>
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
        input: SignInInput,
        previous_token: Option<&str>,
    ) -> TodoResult<SignInOutput> {
        // A name that could never have been registered is simply unknown
        let username = Username::new(&input.username).map_err(|_| TodoError::UserNotFound)?;

        let account = self
            .account_repo
            .find_by_username(&username)
            .await?
            .ok_or(TodoError::UserNotFound)?;

        let raw_password =
            RawPassword::for_verification(input.password, &self.config.password_policy)?;
        if !account
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(TodoError::PasswordMismatch);
        }

        let rehashed = if account.password_hash.needs_rehash() {
            tracing::info!(account_id = %account.account_id, "Password hash upgraded");
            Some(UserPassword::from_raw(&raw_password, self.config.pepper())?)
        } else {
            None
        };

        // The list may have changed since the lookup; only sign-in fields are written
        self.account_repo
            .record_sign_in(&account.account_id, rehashed)
            .await?;

        let (session, session_token) = self
            .gate
            .start(account.account_id, account.username.clone(), previous_token)
            .await?;

        tracing::info!(
            account_id = %account.account_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            username: account.username,
        })
    }
}
