//! Session Gate
//!
//! Issues, resolves and ends per-client sessions. A client holds
//! `<session id>.<HMAC signature>` in a cookie; the signature is checked
//! before any storage lookup.

use std::sync::Arc;

use chrono::TimeDelta;
use kernel::error::{app_error::ResultExt, kind::ErrorKind};
use kernel::id::{AccountId, SessionId};

use crate::application::config::TodoConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::username::Username;
use crate::error::{TodoError, TodoResult};

pub struct SessionGate<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<TodoConfig>,
}

impl<S> SessionGate<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<TodoConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Start a session for an account and return its token
    ///
    /// A session the client already held is ended first, so a second
    /// sign-in from the same browser replaces rather than accumulates.
    pub async fn start(
        &self,
        account_id: AccountId,
        username: Username,
        previous_token: Option<&str>,
    ) -> TodoResult<(Session, String)> {
        if let Some(previous) = previous_token {
            if let Ok(previous_id) = self.parse_token(previous) {
                self.session_repo.delete(&previous_id).await?;
            }
        }

        let session = Session::new(account_id, username, self.ttl()?);
        self.session_repo.create(&session).await?;

        let token = self.issue_token(&session.session_id);
        Ok((session, token))
    }

    /// Resolve a token to a live session, sliding its expiry
    pub async fn resolve(&self, token: &str) -> TodoResult<Session> {
        let session_id = self.parse_token(token)?;

        let mut session = self
            .session_repo
            .find_by_id(&session_id)
            .await?
            .ok_or(TodoError::NotAuthenticated)?;

        if session.is_expired() {
            self.session_repo.delete(&session_id).await?;
            return Err(TodoError::NotAuthenticated);
        }

        session.touch();
        session.extend_if_needed(self.ttl()?);
        self.session_repo.update(&session).await?;

        Ok(session)
    }

    /// End the session named by `token`
    pub async fn end(&self, token: &str) -> TodoResult<SessionId> {
        let session_id = self.parse_token(token)?;
        self.session_repo.delete(&session_id).await?;
        Ok(session_id)
    }

    /// Drop a session whose account has disappeared
    pub async fn discard(&self, session_id: &SessionId) -> TodoResult<()> {
        self.session_repo.delete(session_id).await
    }

    pub fn issue_token(&self, session_id: &SessionId) -> String {
        platform::crypto::sign_token(&self.config.session_secret, &session_id.to_string())
    }

    pub fn parse_token(&self, token: &str) -> TodoResult<SessionId> {
        let payload = platform::crypto::verify_token(&self.config.session_secret, token)
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected session token");
                TodoError::NotAuthenticated
            })?;

        payload.parse().map_err(|_| TodoError::NotAuthenticated)
    }

    fn ttl(&self) -> TodoResult<TimeDelta> {
        Ok(TimeDelta::from_std(self.config.session_ttl)
            .map_app_err(ErrorKind::InternalServerError, "Invalid session TTL")?)
    }
}
