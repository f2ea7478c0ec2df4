//! Login and signup payloads.
//!
//! The backend owns authentication; the dashboard only posts credentials and
//! keeps whatever user it gets back for the session.

use crate::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
}

impl User {
    /// Name to show in the header, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthResponse {
    /// The session user; a response without one is treated as the email
    /// that was submitted.
    pub fn into_user(self, email: &str) -> User {
        self.user.unwrap_or_else(|| User {
            name: String::new(),
            email: email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_without_user_falls_back_to_email() {
        let resp: AuthResponse = serde_json::from_str(r#"{"message":"Login successful"}"#).unwrap();
        assert_eq!(resp.message, "Login successful");
        let user = resp.into_user("ana@example.com");
        assert_eq!(user.display_name(), "ana@example.com");
    }

    #[test]
    fn test_response_with_user() {
        let resp: AuthResponse = serde_json::from_str(
            r#"{"message":"ok","token":"t1","user":{"name":"Ana","email":"ana@example.com"}}"#,
        )
        .unwrap();
        assert_eq!(resp.token.as_deref(), Some("t1"));
        assert_eq!(resp.into_user("x").display_name(), "Ana");
    }

    #[test]
    fn test_login_request_serializes() {
        let req = LoginRequest {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["email"], "a@b.c");
        assert_eq!(json["password"], "pw");
    }
}
