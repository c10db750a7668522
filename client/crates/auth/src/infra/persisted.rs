//! Persisted Session Copy
//!
//! Token and user under two keys of a [`SessionStorage`]. The user is kept
//! as a JSON string.

use std::sync::Arc;

use platform::SessionStorage;

use crate::application::config::SessionConfig;
use crate::domain::entity::user::SessionUser;
use crate::error::{AuthError, AuthResult};

pub struct PersistedSession {
    storage: Arc<dyn SessionStorage>,
    config: SessionConfig,
}

impl PersistedSession {
    pub fn new(storage: Arc<dyn SessionStorage>, config: SessionConfig) -> Self {
        Self { storage, config }
    }

    /// Both halves, or `None` if either is missing
    pub fn load(&self) -> AuthResult<Option<(String, SessionUser)>> {
        let token = self.storage.get(&self.config.token_key)?;
        let user = self.storage.get(&self.config.user_key)?;

        let (Some(token), Some(user)) = (token, user) else {
            return Ok(None);
        };
        if token.is_empty() {
            return Ok(None);
        }

        let user: SessionUser = serde_json::from_str(&user).map_err(AuthError::CorruptUser)?;
        Ok(Some((token, user)))
    }

    pub fn save(&self, token: &str, user: &SessionUser) -> AuthResult<()> {
        let user = serde_json::to_string(user).map_err(AuthError::CorruptUser)?;
        self.storage.set(&self.config.token_key, token)?;
        self.storage.set(&self.config.user_key, &user)?;
        Ok(())
    }

    pub fn clear(&self) -> AuthResult<()> {
        self.storage.remove(&self.config.token_key)?;
        self.storage.remove(&self.config.user_key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_role::Role;
    use kernel::id::UserId;
    use platform::MemoryStorage;

    fn persisted() -> (Arc<MemoryStorage>, PersistedSession) {
        let storage = Arc::new(MemoryStorage::new());
        let session = PersistedSession::new(storage.clone(), SessionConfig::default());
        (storage, session)
    }

    #[test]
    fn test_save_then_load() {
        let (storage, session) = persisted();
        let user = SessionUser {
            id: UserId::new("u1"),
            name: "Asha".to_string(),
            email: "a@x.com".to_string(),
            role: Role::Student,
        };
        session.save("tok", &user).unwrap();

        assert_eq!(storage.get("token").unwrap().as_deref(), Some("tok"));
        assert_eq!(session.load().unwrap(), Some(("tok".to_string(), user)));

        session.clear().unwrap();
        assert_eq!(session.load().unwrap(), None);
        assert_eq!(storage.get("user").unwrap(), None);
    }

    #[test]
    fn test_half_a_session_is_none() {
        let (storage, session) = persisted();
        storage.set("token", "tok").unwrap();
        assert_eq!(session.load().unwrap(), None);

        storage.remove("token").unwrap();
        storage.set("user", r#"{"_id":"u1","role":"ADMIN"}"#).unwrap();
        assert_eq!(session.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_user_is_reported() {
        let (storage, session) = persisted();
        storage.set("token", "tok").unwrap();
        storage.set("user", "null").unwrap();
        assert!(matches!(session.load(), Err(AuthError::CorruptUser(_))));
    }
}
