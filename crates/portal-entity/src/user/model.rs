//! User entity model.

use serde::{Deserialize, Serialize};

use super::role::UserRole;

/// A portal user as recorded in the static credential table.
///
/// The on-disk shape is `{id, username, password, role}`. `password` holds
/// either a plaintext reference or an Argon2 PHC hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque user identifier.
    pub id: String,
    /// Unique login name.
    pub username: String,
    /// Plaintext reference or Argon2 PHC string. Never serialized back out.
    #[serde(skip_serializing)]
    pub password: String,
    /// Portal role.
    pub role: UserRole,
}

impl User {
    /// Whether the stored password is an Argon2 PHC hash rather than plaintext.
    pub fn has_hashed_password(&self) -> bool {
        self.password.starts_with("$argon2")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_table_row() {
        let user: User = serde_json::from_str(
            r#"{"id":"1","username":"alice","password":"Secret#1","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, UserRole::Admin);
        assert!(!user.has_hashed_password());
    }

    #[test]
    fn test_password_not_serialized() {
        let user = User {
            id: "2".to_string(),
            username: "bob".to_string(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            role: UserRole::User,
        };
        assert!(user.has_hashed_password());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "user");
    }
}
