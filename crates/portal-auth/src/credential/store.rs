//! Static credential table.
//!
//! The table is a JSON array of `{id, username, password, role}` rows,
//! loaded once at startup. Lookups never fail: an unknown user or a wrong
//! password both yield `None`.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use portal_core::error::AppError;
use portal_entity::user::User;

use crate::password::PasswordHasher;

/// Resolves a username/password pair to a user record.
pub trait CredentialStore: Send + Sync + fmt::Debug {
    /// Returns the user whose username and password both match exactly.
    fn find_user(&self, username: &str, password: &str) -> Option<User>;

    /// Returns every user in the table.
    fn users(&self) -> Vec<User>;
}

/// Immutable, in-memory credential table.
#[derive(Debug, Clone)]
pub struct StaticCredentialStore {
    users: Vec<User>,
    hasher: PasswordHasher,
}

impl StaticCredentialStore {
    /// Builds a store from user records. Usernames must be unique.
    pub fn new(users: Vec<User>) -> Result<Self, AppError> {
        ensure_unique_usernames(&users)?;

        let plaintext = users.iter().filter(|u| !u.has_hashed_password()).count();
        if plaintext > 0 {
            warn!(
                count = plaintext,
                "Credential table contains plaintext passwords; hash them with `portal-cli hash-password`"
            );
        }

        Ok(Self {
            users,
            hasher: PasswordHasher::new(),
        })
    }

    /// Parses a JSON credential table.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let users: Vec<User> = serde_json::from_str(json).map_err(|e| {
            AppError::configuration(format!("Invalid credential table: {e}"))
        })?;
        Self::new(users)
    }

    /// Loads the JSON credential table at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::configuration(format!(
                "Failed to read credential table '{}': {e}",
                path.display()
            ))
        })?;
        let store = Self::from_json(&json)?;
        info!(path = %path.display(), users = store.users.len(), "Credential table loaded");
        Ok(store)
    }
}

fn ensure_unique_usernames(users: &[User]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for user in users {
        if !seen.insert(user.username.as_str()) {
            return Err(AppError::configuration(format!(
                "Duplicate username in credential table: '{}'",
                user.username
            )));
        }
    }
    Ok(())
}

impl CredentialStore for StaticCredentialStore {
    fn find_user(&self, username: &str, password: &str) -> Option<User> {
        self.users
            .iter()
            .find(|user| user.username == username)
            .filter(|user| self.hasher.verify_credential(user, password))
            .cloned()
    }

    fn users(&self) -> Vec<User> {
        self.users.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_entity::user::UserRole;

    const TABLE: &str = r#"[
        {"id": "1", "username": "alice", "password": "Alice#2024", "role": "admin"},
        {"id": "2", "username": "bob", "password": "Bob#2024", "role": "user"},
        {"id": "3", "username": "carol", "password": "Carol#2024", "role": "staff"}
    ]"#;

    #[test]
    fn test_find_user_exact_match() {
        let store = StaticCredentialStore::from_json(TABLE).unwrap();
        let bob = store.find_user("bob", "Bob#2024").unwrap();
        assert_eq!(bob.id, "2");
        assert_eq!(bob.role, UserRole::User);

        let carol = store.find_user("carol", "Carol#2024").unwrap();
        assert_eq!(carol.role, UserRole::Staff);
    }

    #[test]
    fn test_find_user_rejects_other_combinations() {
        let store = StaticCredentialStore::from_json(TABLE).unwrap();
        assert!(store.find_user("bob", "wrong").is_none());
        assert!(store.find_user("bob", "Alice#2024").is_none());
        assert!(store.find_user("Bob", "Bob#2024").is_none());
        assert!(store.find_user("dave", "Bob#2024").is_none());
        assert!(store.find_user("", "").is_none());
    }

    #[test]
    fn test_hashed_password_entry() {
        let hash = PasswordHasher::new().hash_password("S3cure!pass").unwrap();
        let store = StaticCredentialStore::new(vec![User {
            id: "9".to_string(),
            username: "erin".to_string(),
            password: hash.clone(),
            role: UserRole::Admin,
        }])
        .unwrap();

        assert!(store.find_user("erin", "S3cure!pass").is_some());
        assert!(store.find_user("erin", "s3cure!pass").is_none());
        assert!(store.find_user("erin", &hash).is_none());
    }

    #[test]
    fn test_corrupt_hash_entry_never_matches() {
        let store = StaticCredentialStore::from_json(
            r#"[{"id": "4", "username": "dan", "password": "$argon2id$garbage", "role": "user"}]"#,
        )
        .unwrap();
        assert!(store.find_user("dan", "$argon2id$garbage").is_none());
        assert!(store.find_user("dan", "garbage").is_none());
    }

    #[test]
    fn test_duplicate_usernames_rejected() {
        let json = r#"[
            {"id": "1", "username": "bob", "password": "a", "role": "user"},
            {"id": "2", "username": "bob", "password": "b", "role": "admin"}
        ]"#;
        let err = StaticCredentialStore::from_json(json).unwrap_err();
        assert_eq!(err.kind, portal_core::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_malformed_table_rejected() {
        assert!(StaticCredentialStore::from_json("{}").is_err());
        assert!(StaticCredentialStore::from_json(r#"[{"id": "1"}]"#).is_err());
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = StaticCredentialStore::load("/nonexistent/users.json").unwrap_err();
        assert_eq!(err.kind, portal_core::error::ErrorKind::Configuration);
    }
}
