//! In-Memory Repository Implementation
//!
//! All state lives in the process and is lost on restart. Each repository
//! call takes its table's lock exactly once, so a call is atomic with
//! respect to every other call.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::{AccountId, SessionId};
use tokio::sync::RwLock;

use crate::domain::entity::{account::Account, session::Session, todo::TodoList};
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::domain::value_object::{password::UserPassword, username::Username};
use crate::error::{TodoError, TodoResult};

#[derive(Default)]
struct AccountTable {
    by_id: HashMap<AccountId, Account>,
    by_username: HashMap<Username, AccountId>,
}

#[derive(Default)]
struct Tables {
    accounts: RwLock<AccountTable>,
    sessions: RwLock<HashMap<SessionId, Session>>,
}

/// Process-local account and session store
///
/// Cloning is cheap; clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn account_count(&self) -> usize {
        self.tables.accounts.read().await.by_id.len()
    }

    pub async fn session_count(&self) -> usize {
        self.tables.sessions.read().await.len()
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for MemoryStore {
    async fn create(&self, account: &Account) -> TodoResult<()> {
        let mut table = self.tables.accounts.write().await;

        if table.by_username.contains_key(&account.username) {
            return Err(TodoError::DuplicateUsername);
        }

        table
            .by_username
            .insert(account.username.clone(), account.account_id);
        table.by_id.insert(account.account_id, account.clone());

        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> TodoResult<Option<Account>> {
        let table = self.tables.accounts.read().await;
        Ok(table.by_id.get(account_id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> TodoResult<Option<Account>> {
        let table = self.tables.accounts.read().await;
        Ok(table
            .by_username
            .get(username)
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn record_sign_in(
        &self,
        account_id: &AccountId,
        rehashed: Option<UserPassword>,
    ) -> TodoResult<()> {
        let mut table = self.tables.accounts.write().await;

        let account = table
            .by_id
            .get_mut(account_id)
            .ok_or(TodoError::NotAuthenticated)?;

        if let Some(password_hash) = rehashed {
            account.password_hash = password_hash;
        }
        account.record_sign_in();
        Ok(())
    }

    async fn modify_todos<F, T>(&self, account_id: &AccountId, f: F) -> TodoResult<T>
    where
        F: FnOnce(&mut TodoList) -> TodoResult<T> + Send,
        T: Send,
    {
        let mut table = self.tables.accounts.write().await;

        let account = table
            .by_id
            .get_mut(account_id)
            .ok_or(TodoError::NotAuthenticated)?;

        let result = f(&mut account.todos);
        if result.is_ok() {
            account.updated_at = Utc::now();
        }
        result
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for MemoryStore {
    async fn create(&self, session: &Session) -> TodoResult<()> {
        let mut sessions = self.tables.sessions.write().await;
        sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: &SessionId) -> TodoResult<Option<Session>> {
        let sessions = self.tables.sessions.read().await;
        Ok(sessions.get(session_id).cloned())
    }

    async fn update(&self, session: &Session) -> TodoResult<()> {
        let mut sessions = self.tables.sessions.write().await;

        // A session deleted by a concurrent sign-out stays deleted
        if let Some(stored) = sessions.get_mut(&session.session_id) {
            *stored = session.clone();
        }
        Ok(())
    }

    async fn delete(&self, session_id: &SessionId) -> TodoResult<()> {
        let mut sessions = self.tables.sessions.write().await;
        sessions.remove(session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> TodoResult<u64> {
        let mut sessions = self.tables.sessions.write().await;

        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, session| !Session::expired_at(session.expires_at_ms, now));
        let deleted = (before - sessions.len()) as u64;

        if deleted > 0 {
            tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::description::Description;
    use crate::domain::value_object::password::RawPassword;
    use chrono::TimeDelta;
    use platform::password::PasswordPolicy;

    fn account(name: &str) -> Account {
        let raw = RawPassword::new("pw1".to_string(), &PasswordPolicy::default()).unwrap();
        Account::new(
            Username::new(name).unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryStore::new();
        let alice = account("alice");
        AccountRepository::create(&store, &alice).await.unwrap();

        let by_name = store
            .find_by_username(&Username::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_name.account_id, alice.account_id);

        let by_id = AccountRepository::find_by_id(&store, &alice.account_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_id.username, alice.username);

        assert!(
            store
                .find_by_username(&Username::new("bob").unwrap())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = MemoryStore::new();
        let first = account("alice");
        AccountRepository::create(&store, &first).await.unwrap();

        let second = account("alice");
        let result = AccountRepository::create(&store, &second).await;
        assert!(matches!(result, Err(TodoError::DuplicateUsername)));

        // The original record is untouched
        let stored = store
            .find_by_username(&first.username)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.account_id, first.account_id);
        assert_eq!(store.account_count().await, 1);
    }

    #[tokio::test]
    async fn test_modify_todos_persists() {
        let store = MemoryStore::new();
        let alice = account("alice");
        AccountRepository::create(&store, &alice).await.unwrap();

        let len = store
            .modify_todos(&alice.account_id, |todos| {
                todos.push(Description::new("buy milk").unwrap());
                Ok(todos.len())
            })
            .await
            .unwrap();
        assert_eq!(len, 1);

        let stored = AccountRepository::find_by_id(&store, &alice.account_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.todos.len(), 1);
    }

    #[tokio::test]
    async fn test_record_sign_in_leaves_list_alone() {
        let store = MemoryStore::new();
        let alice = account("alice");
        AccountRepository::create(&store, &alice).await.unwrap();

        store
            .modify_todos(&alice.account_id, |todos| {
                todos.push(Description::new("buy milk").unwrap());
                Ok(())
            })
            .await
            .unwrap();

        let raw = RawPassword::new("pw2".to_string(), &PasswordPolicy::default()).unwrap();
        let rehashed = UserPassword::from_raw(&raw, None).unwrap();
        store
            .record_sign_in(&alice.account_id, Some(rehashed.clone()))
            .await
            .unwrap();

        let stored = AccountRepository::find_by_id(&store, &alice.account_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.todos.len(), 1);
        assert!(stored.last_sign_in_at.is_some());
        assert!(stored.password_hash == rehashed);

        let missing = store.record_sign_in(&AccountId::new(), None).await;
        assert!(matches!(missing, Err(TodoError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn test_modify_todos_unknown_account() {
        let store = MemoryStore::new();
        let result = store
            .modify_todos(&AccountId::new(), |todos| Ok(todos.len()))
            .await;
        assert!(matches!(result, Err(TodoError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn test_concurrent_modifications_are_not_lost() {
        let store = MemoryStore::new();
        let alice = account("alice");
        AccountRepository::create(&store, &alice).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            let account_id = alice.account_id;
            handles.push(tokio::spawn(async move {
                store
                    .modify_todos(&account_id, move |todos| {
                        todos.push(Description::new(format!("item {i}")).unwrap());
                        Ok(())
                    })
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = AccountRepository::find_by_id(&store, &alice.account_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.todos.len(), 20);
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let store = MemoryStore::new();
        let session = Session::new(
            AccountId::new(),
            Username::new("alice").unwrap(),
            TimeDelta::hours(1),
        );

        SessionRepository::create(&store, &session).await.unwrap();
        assert!(
            SessionRepository::find_by_id(&store, &session.session_id)
                .await
                .unwrap()
                .is_some()
        );

        store.delete(&session.session_id).await.unwrap();
        assert!(
            SessionRepository::find_by_id(&store, &session.session_id)
                .await
                .unwrap()
                .is_none()
        );

        // Updating a deleted session does not resurrect it
        SessionRepository::update(&store, &session).await.unwrap();
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let store = MemoryStore::new();
        let username = Username::new("alice").unwrap();
        let live = Session::new(AccountId::new(), username.clone(), TimeDelta::hours(1));
        let expired = Session::new(AccountId::new(), username, TimeDelta::milliseconds(-1));

        SessionRepository::create(&store, &live).await.unwrap();
        SessionRepository::create(&store, &expired).await.unwrap();

        assert_eq!(store.cleanup_expired().await.unwrap(), 1);
        assert_eq!(store.session_count().await, 1);
        assert!(
            SessionRepository::find_by_id(&store, &live.session_id)
                .await
                .unwrap()
                .is_some()
        );
    }
}
