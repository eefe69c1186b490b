//! In-memory session state.
//!
//! The client holds only the access token and the user projection; the
//! refresh token lives in the transport's cookie store and is never visible
//! here.

use std::sync::Mutex;

use crate::types::User;

#[derive(Default)]
struct Inner {
    access_token: Option<String>,
    user: Option<User>,
    expired: bool,
}

/// Process-local session store
#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<Inner>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fresh session after login or signup
    pub fn set_session(&self, user: User, access_token: String) {
        let mut inner = self.inner.lock().expect("session lock poisoned");
        inner.user = Some(user);
        inner.access_token = Some(access_token);
        inner.expired = false;
    }

    /// Replace only the access token (session renewal)
    pub fn set_access_token(&self, access_token: String) {
        let mut inner = self.inner.lock().expect("session lock poisoned");
        inner.access_token = Some(access_token);
    }

    /// Replace the stored user projection (profile update)
    pub fn set_user(&self, user: User) {
        let mut inner = self.inner.lock().expect("session lock poisoned");
        inner.user = Some(user);
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner
            .lock()
            .expect("session lock poisoned")
            .access_token
            .clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.lock().expect("session lock poisoned").user.clone()
    }

    /// Drop all session state
    pub fn clear(&self) {
        let mut inner = self.inner.lock().expect("session lock poisoned");
        inner.access_token = None;
        inner.user = None;
    }

    /// Flag that renewal failed and a fresh login is required
    pub fn mark_expired(&self) {
        self.inner.lock().expect("session lock poisoned").expired = true;
    }

    /// Whether the session was dropped by a failed renewal
    pub fn is_expired(&self) -> bool {
        self.inner.lock().expect("session lock poisoned").expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Admin".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    #[test]
    fn test_session_round_trip() {
        let store = SessionStore::new();
        assert!(store.access_token().is_none());

        store.set_session(user(), "token-1".to_string());
        assert_eq!(store.access_token().as_deref(), Some("token-1"));
        assert!(store.user().is_some());
        assert!(!store.is_expired());

        store.set_access_token("token-2".to_string());
        assert_eq!(store.access_token().as_deref(), Some("token-2"));

        store.clear();
        store.mark_expired();
        assert!(store.access_token().is_none());
        assert!(store.user().is_none());
        assert!(store.is_expired());
    }

    #[test]
    fn test_new_session_clears_expired_flag() {
        let store = SessionStore::new();
        store.mark_expired();

        store.set_session(user(), "token".to_string());
        assert!(!store.is_expired());
    }
}
