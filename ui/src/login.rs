//! The login form component.

use dioxus::prelude::*;

use crate::auth;
use crate::components::{Button, ButtonVariant, Input};
use crate::form::{Credentials, FormState};

/// Login form with client-side validation and a simulated authentication call.
///
/// Owns its [`FormState`]; reports outcomes only through the two callbacks.
/// `class` is a styling hook for the host and has no effect on behavior.
#[component]
pub fn LoginForm(
    #[props(default = String::new())] class: String,
    on_login_success: EventHandler<Credentials>,
    on_navigate_to_signup: EventHandler<()>,
) -> Element {
    let mut state = use_signal(FormState::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // begin_submit is a no-op while an attempt is in flight, so a second
        // submit is inert even if the event fires while the button is disabled.
        let Some(credentials) = state.with_mut(FormState::begin_submit) else {
            return;
        };
        tracing::info!("login attempt for {:?}", credentials.username);
        spawn(async move {
            let result = auth::check_credentials(&credentials).await;
            state.with_mut(|s| s.resolve(&result));

            match &result {
                Ok(()) => {
                    tracing::info!("login successful");
                    on_login_success.call(credentials);
                }
                Err(err) => {
                    tracing::warn!("login failed: {}", err);
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-form {class}",

            h2 { class: "login-form-title", "Log in" }

            form {
                onsubmit: handle_submit,
                class: "login-form-fields",

                FormField {
                    id: "username",
                    label: "Username",
                    error: state().field_errors.username,
                    Input {
                        id: "username",
                        placeholder: "Username",
                        value: state().username,
                        autocomplete: "username",
                        disabled: state().submitting,
                        oninput: move |evt: FormEvent| state.with_mut(|s| s.username = evt.value()),
                    }
                }

                FormField {
                    id: "password",
                    label: "Password",
                    error: state().field_errors.password,
                    Input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Password",
                        value: state().password,
                        autocomplete: "current-password",
                        disabled: state().submitting,
                        oninput: move |evt: FormEvent| state.with_mut(|s| s.password = evt.value()),
                    }
                }

                if let Some(err) = state().root_error {
                    p { class: "form-error form-error-root", "{err}" }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "login-form-submit",
                    r#type: "submit",
                    disabled: state().submitting,
                    if state().submitting { "Logging in..." } else { "Log in" }
                }
            }

            p {
                class: "login-form-signup",
                "or, "
                Button {
                    variant: ButtonVariant::Link,
                    disabled: state().submitting,
                    onclick: move |_| on_navigate_to_signup.call(()),
                    "sign up"
                }
            }
        }
    }
}

/// Label + control + inline error message for one field.
#[component]
fn FormField(
    id: String,
    label: String,
    #[props(!optional)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { r#for: "{id}", "{label}" }
            {children}
            if let Some(err) = error {
                p { class: "form-error", "{err}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::auth;
    use crate::form::FormState;

    // The same begin_submit -> check -> resolve sequence the component's
    // submit handler runs, without a renderer.
    async fn submit(state: &mut FormState) -> Option<crate::form::Credentials> {
        let credentials = state.begin_submit()?;
        let result = auth::check_credentials(&credentials).await;
        state.resolve(&result);
        result.ok().map(|()| credentials)
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_flow_surfaces_credentials_once() {
        let mut state = FormState {
            username: "testuser".to_string(),
            password: "password123".to_string(),
            ..Default::default()
        };
        let delivered = submit(&mut state).await.expect("login should succeed");
        assert_eq!(delivered.username, "testuser");
        assert_eq!(delivered.password, "password123");
        assert!(!state.submitting);
        assert!(state.field_errors.is_empty());
        assert!(state.root_error.is_none());
        // Field values are left in place after success.
        assert_eq!(state.username, "testuser");
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_failure_never_starts_the_check() {
        let mut state = FormState {
            username: String::new(),
            password: "short".to_string(),
            ..Default::default()
        };
        assert!(submit(&mut state).await.is_none());
        // Validation failed, so the flow never entered the submitting state.
        assert!(!state.submitting);
        assert!(state.field_errors.username.is_some());
        assert!(state.field_errors.password.is_some());
        assert!(state.root_error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_blocked_username_does_not_surface_credentials() {
        let mut state = FormState {
            username: "erroruser".to_string(),
            password: "password123".to_string(),
            ..Default::default()
        };
        assert!(submit(&mut state).await.is_none());
        assert!(!state.submitting);
        assert_eq!(
            state.field_errors.username.as_deref(),
            Some("This username is currently blocked by the server.")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_root_error_clears_it() {
        let mut state = FormState {
            username: "bob".to_string(),
            password: "wrongpw1".to_string(),
            ..Default::default()
        };
        assert!(submit(&mut state).await.is_none());
        assert!(state.root_error.is_some());

        state.username = "testuser".to_string();
        state.password = "password123".to_string();
        assert!(submit(&mut state).await.is_some());
        assert!(state.root_error.is_none());
    }
}
