//! `login`: post credentials and report what the backend says.

use bi_model::auth::{AuthResponse, LoginRequest};
use bi_model::client::ApiClient;
use bi_model::ApiError;
use log::warn;

/// Line printed for a login attempt: the backend's message on success, the
/// user-facing error text otherwise.
pub fn login_message(result: &Result<AuthResponse, ApiError>, email: &str) -> String {
    match result {
        Ok(response) if response.message.is_empty() => format!("Logged in as {}", email),
        Ok(response) => response.message.clone(),
        Err(e) => e.to_string(),
    }
}

pub async fn run_login(client: &ApiClient, email: &str, password: &str) -> anyhow::Result<()> {
    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let result = client.login(&request).await;
    if let Err(e) = &result {
        warn!("[BI] login for {} failed: {:?}", request.email, e);
    }
    println!("{}", login_message(&result, &request.email));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_messages() {
        let ok = Ok(AuthResponse {
            message: "Login successful".to_string(),
            ..Default::default()
        });
        assert_eq!(login_message(&ok, "a@b.c"), "Login successful");

        let silent = Ok(AuthResponse::default());
        assert_eq!(login_message(&silent, "a@b.c"), "Logged in as a@b.c");

        let offline = Err(ApiError::Connection("refused".to_string()));
        assert_eq!(login_message(&offline, "a@b.c"), "Error connecting to server");

        let rejected = Err(ApiError::Backend {
            status: 401,
            message: "Invalid credentials".to_string(),
        });
        assert_eq!(login_message(&rejected, "a@b.c"), "Invalid credentials");
    }
}
