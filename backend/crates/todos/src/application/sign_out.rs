//! Sign Out Use Case
//!
//! Invalidates the client's session.

use std::sync::Arc;

use crate::application::config::TodoConfig;
use crate::application::session_gate::SessionGate;
use crate::domain::repository::SessionRepository;
use crate::error::{TodoError, TodoResult};

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    gate: SessionGate<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<TodoConfig>) -> Self {
        Self {
            gate: SessionGate::new(session_repo, config),
        }
    }

    /// Sign out from the current session
    ///
    /// A missing or forged token leaves nothing to invalidate and is not
    /// an error.
    pub async fn execute(&self, session_token: Option<&str>) -> TodoResult<()> {
        let Some(token) = session_token else {
            return Ok(());
        };

        match self.gate.end(token).await {
            Ok(session_id) => {
                tracing::info!(session_id = %session_id, "User signed out");
                Ok(())
            }
            Err(TodoError::NotAuthenticated) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
