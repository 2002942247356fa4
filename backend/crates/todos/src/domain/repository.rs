//! Repository Traits
//!
//! Interfaces for account and session storage. Implementations live in
//! the infrastructure layer.

use kernel::id::{AccountId, SessionId};

use crate::domain::entity::{account::Account, session::Session, todo::TodoList};
use crate::domain::value_object::{password::UserPassword, username::Username};
use crate::error::TodoResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Store a new account; `DuplicateUsername` if the username is taken
    async fn create(&self, account: &Account) -> TodoResult<()>;

    async fn find_by_id(&self, account_id: &AccountId) -> TodoResult<Option<Account>>;

    async fn find_by_username(&self, username: &Username) -> TodoResult<Option<Account>>;

    /// Stamp a successful sign-in, storing `rehashed` as the new hash if given
    ///
    /// Only credential and sign-in fields change. `NotAuthenticated` if the
    /// account no longer exists.
    async fn record_sign_in(
        &self,
        account_id: &AccountId,
        rehashed: Option<UserPassword>,
    ) -> TodoResult<()>;

    /// Run `f` against an account's list under the store's write lock
    ///
    /// `NotAuthenticated` if the account does not exist. Changes made by
    /// `f` are kept even when it returns an error.
    async fn modify_todos<F, T>(&self, account_id: &AccountId, f: F) -> TodoResult<T>
    where
        F: FnOnce(&mut TodoList) -> TodoResult<T> + Send,
        T: Send;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    async fn create(&self, session: &Session) -> TodoResult<()>;

    async fn find_by_id(&self, session_id: &SessionId) -> TodoResult<Option<Session>>;

    /// Update session (e.g., last activity, expiry)
    async fn update(&self, session: &Session) -> TodoResult<()>;

    /// Delete a session; deleting an unknown id is not an error
    async fn delete(&self, session_id: &SessionId) -> TodoResult<()>;

    /// Delete expired sessions and return how many were removed
    async fn cleanup_expired(&self) -> TodoResult<u64>;
}

/// Everything the HTTP layer needs from a storage backend
pub trait TodoStore: AccountRepository + SessionRepository + Clone + Send + Sync + 'static {}

impl<T> TodoStore for T where T: AccountRepository + SessionRepository + Clone + Send + Sync + 'static
{}
