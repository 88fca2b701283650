//! Login page: lays out the form and supplies its callbacks.

use dioxus::prelude::*;
use ui::{Credentials, LoginForm};

/// Login page component.
///
/// A real application would navigate and store auth state here; this demo logs
/// the outcome and raises an alert.
#[component]
pub fn Login() -> Element {
    let handle_login_success = move |credentials: Credentials| {
        // Log the username only, never the password.
        tracing::info!("login successful for {:?}", credentials.username);
        alert(&format!(
            "Login successful! Welcome, {}.",
            credentials.username
        ));
    };

    let handle_navigate_to_signup = move |()| {
        tracing::info!("navigate to signup requested");
        alert("Navigating to sign up page (functionality to be implemented).");
    };

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-card",
                LoginForm {
                    on_login_success: handle_login_success,
                    on_navigate_to_signup: handle_navigate_to_signup,
                }
            }
        }
    }
}

/// Raise a browser/webview alert.
fn alert(message: &str) {
    let _ = document::eval(&format!("alert('{}')", escape_js_single_quoted(message)));
}

/// Escape a string for interpolation into a single-quoted JS literal.
///
/// Besides the quote and backslash, line terminators must be escaped too:
/// raw `\n`, `\r`, U+2028, and U+2029 all end a JS string literal.
fn escape_js_single_quoted(message: &str) -> String {
    let mut escaped = String::with_capacity(message.len());
    for c in message.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_js_single_quoted;

    #[test]
    fn test_escapes_quotes_and_backslashes() {
        assert_eq!(escape_js_single_quoted(r"it's a \ test"), r"it\'s a \\ test");
    }

    #[test]
    fn test_escapes_line_terminators() {
        assert_eq!(
            escape_js_single_quoted("a\nb\rc\u{2028}d\u{2029}e"),
            r"a\nb\rc d e"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(
            escape_js_single_quoted("Login successful! Welcome, testuser."),
            "Login successful! Welcome, testuser."
        );
    }
}
