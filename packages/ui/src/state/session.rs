//! Login and the persisted session marker.

use store::{SessionStorage, User};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("No account uses this email.")]
    UnknownUser,
    #[error("Wrong password.")]
    WrongPassword,
    #[error("This account is inactive. Ask your sales head to enable it.")]
    Inactive,
}

/// Find the user for `email` and check `password`.
pub fn authenticate(users: &[User], email: &str, password: &str) -> Result<User, LoginError> {
    let email = email.trim();
    let user = users
        .iter()
        .find(|u| u.email.trim().eq_ignore_ascii_case(email))
        .ok_or(LoginError::UnknownUser)?;
    if user.password != password {
        return Err(LoginError::WrongPassword);
    }
    if !user.is_active {
        return Err(LoginError::Inactive);
    }
    Ok(user.clone())
}

/// Durable storage plus the key the signed-in user's id lives under.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn remember(&self, user: &User) {
        self.storage.set(&self.key, &user.id);
    }

    pub fn forget(&self) {
        self.storage.remove(&self.key);
    }

    /// The active user whose id is stored, if any. A key that no longer
    /// matches an active user is removed.
    pub fn restore(&self, users: &[User]) -> Option<User> {
        let id = self.storage.get(&self.key)?;
        match users.iter().find(|u| u.id == id && u.is_active) {
            Some(user) => Some(user.clone()),
            None => {
                tracing::info!("dropping stale session for {id}");
                self.forget();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemorySessionStorage, Role, SESSION_KEY};

    fn user(id: &str, email: &str, active: bool) -> User {
        User {
            id: id.into(),
            name: id.into(),
            email: email.into(),
            role: Role::Broker,
            password: "secret".into(),
            is_active: active,
            photo_url: None,
        }
    }

    #[test]
    fn test_authenticate_matches_email_loosely() {
        let users = vec![user("u1", "Ana@PSM.local", true)];
        let found = authenticate(&users, "  ana@psm.local ", "secret").unwrap();
        assert_eq!(found.id, "u1");
    }

    #[test]
    fn test_authenticate_errors() {
        let users = vec![user("u1", "ana@psm.local", true), user("u2", "bo@psm.local", false)];
        assert_eq!(
            authenticate(&users, "nobody@psm.local", "secret"),
            Err(LoginError::UnknownUser)
        );
        assert_eq!(
            authenticate(&users, "ana@psm.local", "Secret"),
            Err(LoginError::WrongPassword)
        );
        assert_eq!(
            authenticate(&users, "bo@psm.local", "secret"),
            Err(LoginError::Inactive)
        );
    }

    #[test]
    fn test_restore_finds_remembered_user() {
        let session = SessionStore::new(MemorySessionStorage::new(), SESSION_KEY);
        let users = vec![user("u1", "ana@psm.local", true)];
        session.remember(&users[0]);
        assert_eq!(session.restore(&users).map(|u| u.id), Some("u1".into()));
    }

    #[test]
    fn test_restore_drops_stale_key() {
        let storage = MemorySessionStorage::new();
        let session = SessionStore::new(storage.clone(), SESSION_KEY);
        storage.set(SESSION_KEY, "gone");

        assert!(session.restore(&[user("u1", "ana@psm.local", true)]).is_none());
        assert!(storage.get(SESSION_KEY).is_none());
    }

    #[test]
    fn test_restore_ignores_inactive_user() {
        let storage = MemorySessionStorage::new();
        let session = SessionStore::new(storage.clone(), SESSION_KEY);
        let users = vec![user("u1", "ana@psm.local", false)];
        storage.set(SESSION_KEY, "u1");

        assert!(session.restore(&users).is_none());
        assert!(storage.get(SESSION_KEY).is_none());
    }
}
