//! Account Entity
//!
//! A registered identity: credentials plus the to-do list it owns.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::entity::todo::TodoList;
use crate::domain::value_object::{password::UserPassword, username::Username};

#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    /// Unique, immutable after registration
    pub username: Username,
    pub password_hash: UserPassword,
    pub todos: TodoList,
    pub last_sign_in_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create an account with an empty list
    pub fn new(username: Username, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            account_id: AccountId::new(),
            username,
            password_hash,
            todos: TodoList::new(),
            last_sign_in_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn record_sign_in(&mut self) {
        let now = Utc::now();
        self.last_sign_in_at = Some(now);
        self.updated_at = now;
    }
}
