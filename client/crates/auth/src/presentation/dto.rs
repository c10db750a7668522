//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::SessionUser;
use crate::domain::value_object::user_role::Role;

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Login response (`data` member of the body)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

// ============================================================================
// Register
// ============================================================================

/// Minimum password length accepted by the registration form
pub const MIN_PASSWORD_LEN: usize = 6;

/// Register request
///
/// Self-registration always creates a student account.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    pub fn student(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: Role::Student,
        }
    }

    /// Form-level checks run before the request is sent
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if !looks_like_email(&self.email) {
            return Err("Please enter a valid email address");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 6 characters");
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_wire_shape() {
        let req = RegisterRequest::student("Asha", "a@x.com", "secret1");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"name": "Asha", "email": "a@x.com", "password": "secret1", "role": "STUDENT"})
        );
    }

    #[test]
    fn test_register_validation() {
        assert!(RegisterRequest::student("Asha", "a@x.com", "secret1").validate().is_ok());
        assert_eq!(
            RegisterRequest::student(" ", "a@x.com", "secret1").validate(),
            Err("Name is required")
        );
        assert_eq!(
            RegisterRequest::student("Asha", "a@x", "secret1").validate(),
            Err("Please enter a valid email address")
        );
        assert_eq!(
            RegisterRequest::student("Asha", "a@x.com", "12345").validate(),
            Err("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_login_response_decodes() {
        let resp: LoginResponse = serde_json::from_value(json!({
            "token": "jwt",
            "user": {"_id": "u1", "name": "Asha", "email": "a@x.com", "role": "STUDENT"}
        }))
        .unwrap();
        assert_eq!(resp.token, "jwt");
        assert_eq!(resp.user.role, Role::Student);
    }
}
