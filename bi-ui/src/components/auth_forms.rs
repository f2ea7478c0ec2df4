//! Login and signup forms.
//!
//! Failures show the backend's `message` or "Error connecting to server".

use crate::bridge;
use crate::state::AppState;
use bi_model::auth::{AuthResponse, LoginRequest, SignupRequest, User};
use bi_model::Endpoint;
use dioxus::prelude::*;

const FIELD_STYLE: &str = "display: block; width: 100%; box-sizing: border-box; padding: 8px; margin: 4px 0 12px 0; border: 1px solid #ccc; border-radius: 4px;";
const BUTTON_STYLE: &str = "width: 100%; padding: 10px; background: #1565C0; color: white; border: none; border-radius: 4px; cursor: pointer;";

#[component]
pub fn LoginForm(on_login: EventHandler<User>, on_switch: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let request = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        if request.email.is_empty() || request.password.is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }
        let config = state.api_config();
        submitting.set(true);
        spawn(async move {
            let result: Result<AuthResponse, _> = bridge::post_json(&config, &Endpoint::Login, &request).await;
            submitting.set(false);
            match result {
                Ok(response) => {
                    log::info!("[BI] login: {}", response.message);
                    error.set(None);
                    on_login.call(response.into_user(&request.email));
                }
                Err(e) => {
                    log::warn!("[BI] login failed: {:?}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            onsubmit: on_submit,
            h2 { style: "margin-top: 0;", "Sign in" }
            if let Some(err) = error() {
                div { style: "color: #C62828; margin-bottom: 8px;", "{err}" }
            }
            label {
                "Email"
                input {
                    r#type: "email",
                    style: FIELD_STYLE,
                    value: "{email}",
                    oninput: move |evt: Event<FormData>| email.set(evt.value()),
                }
            }
            label {
                "Password"
                input {
                    r#type: "password",
                    style: FIELD_STYLE,
                    value: "{password}",
                    oninput: move |evt: Event<FormData>| password.set(evt.value()),
                }
            }
            button {
                r#type: "submit",
                style: BUTTON_STYLE,
                disabled: submitting(),
                if submitting() { "Signing in..." } else { "Sign in" }
            }
            p {
                style: "font-size: 13px; text-align: center;",
                "No account? "
                a {
                    href: "#",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        on_switch.call(());
                    },
                    "Sign up"
                }
            }
        }
    }
}

#[component]
pub fn SignupForm(on_signed_up: EventHandler<String>, on_switch: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let request = SignupRequest {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
        };
        if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
            error.set(Some("All fields are required".to_string()));
            return;
        }
        let config = state.api_config();
        submitting.set(true);
        spawn(async move {
            let result: Result<AuthResponse, _> = bridge::post_json(&config, &Endpoint::Signup, &request).await;
            submitting.set(false);
            match result {
                Ok(response) => {
                    let message = if response.message.is_empty() {
                        "Account created, please sign in".to_string()
                    } else {
                        response.message
                    };
                    on_signed_up.call(message);
                }
                Err(e) => {
                    log::warn!("[BI] signup failed: {:?}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            onsubmit: on_submit,
            h2 { style: "margin-top: 0;", "Create account" }
            if let Some(err) = error() {
                div { style: "color: #C62828; margin-bottom: 8px;", "{err}" }
            }
            label {
                "Name"
                input {
                    style: FIELD_STYLE,
                    value: "{name}",
                    oninput: move |evt: Event<FormData>| name.set(evt.value()),
                }
            }
            label {
                "Email"
                input {
                    r#type: "email",
                    style: FIELD_STYLE,
                    value: "{email}",
                    oninput: move |evt: Event<FormData>| email.set(evt.value()),
                }
            }
            label {
                "Password"
                input {
                    r#type: "password",
                    style: FIELD_STYLE,
                    value: "{password}",
                    oninput: move |evt: Event<FormData>| password.set(evt.value()),
                }
            }
            button {
                r#type: "submit",
                style: BUTTON_STYLE,
                disabled: submitting(),
                if submitting() { "Creating..." } else { "Sign up" }
            }
            p {
                style: "font-size: 13px; text-align: center;",
                "Already registered? "
                a {
                    href: "#",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        on_switch.call(());
                    },
                    "Sign in"
                }
            }
        }
    }
}
