use serde::{Deserialize, Serialize};

/// Role given to accounts created without one.
pub const DEFAULT_ROLE: &str = "user";

/// Empty or blank roles become [`DEFAULT_ROLE`]; anything else is kept verbatim.
pub fn role_or_default(role: &str) -> String {
    if role.trim().is_empty() {
        DEFAULT_ROLE.to_string()
    } else {
        role.to_string()
    }
}

/// User record - matches the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store, never reused
    pub id: i32,
    pub name: String,
    /// Unique across all records
    pub email: String,
    /// Argon2 PHC string; `None` for accounts provisioned by an admin
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub role: String,
}

/// User as returned to callers (no password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Row to insert; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: String,
}

/// Self-service sign-up
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Empty means [`DEFAULT_ROLE`]
    #[serde(default)]
    pub role: String,
}

impl RegisterUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: role.into(),
        }
    }
}

/// Credentials exchanged for a token
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

/// Administrative creation; carries no password
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// Replace name and email; role and password are never touched
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_or_default() {
        assert_eq!(role_or_default(""), "user");
        assert_eq!(role_or_default("   "), "user");
        assert_eq!(role_or_default("admin"), "admin");
        assert_eq!(role_or_default("Auditor"), "Auditor");
    }

    #[test]
    fn test_user_response_drops_hash() {
        let user = User {
            id: 1,
            name: "John".into(),
            email: "john@example.com".into(),
            password_hash: Some("$argon2id$...".into()),
            role: "user".into(),
        };

        let response = UserResponse::from(user);
        assert_eq!(response.id, 1);
        assert_eq!(response.role, "user");
    }
}
