//! Session Entity
//!
//! One signed-in client. The browser holds a signed token naming the
//! session; the account it belongs to is looked up on every request.

use chrono::{DateTime, TimeDelta, Utc};
use kernel::id::{AccountId, SessionId};

use crate::domain::value_object::username::Username;

#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: SessionId,
    pub account_id: AccountId,
    pub username: Username,
    /// Expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// TTL is provided by the application layer (config).
    pub fn new(account_id: AccountId, username: Username, ttl: TimeDelta) -> Self {
        let now = Utc::now();
        Self {
            session_id: SessionId::new(),
            account_id,
            username,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Self::expired_at(self.expires_at_ms, Utc::now())
    }

    pub(crate) fn expired_at(expires_at_ms: i64, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() >= expires_at_ms
    }

    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    /// Slide the expiry to `now + ttl` once less than half of `ttl` remains
    ///
    /// Returns true if the expiry moved.
    pub fn extend_if_needed(&mut self, ttl: TimeDelta) -> bool {
        let now = Utc::now();
        if self.expires_at_ms < (now + ttl / 2).timestamp_millis() {
            self.expires_at_ms = (now + ttl).timestamp_millis();
            return true;
        }
        false
    }
}
