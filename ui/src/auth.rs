//! Simulated authentication check.
//!
//! A fixed-delay, hard-coded-outcome stand-in for a real remote login call. A
//! real implementation would replace [`check_credentials`] with a genuine
//! request plus real error classification; the error taxonomy here is the
//! contract that implementation would fill in.

use std::time::Duration;

use thiserror::Error;

use crate::form::Credentials;

/// Artificial network delay applied to every check.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Why a login attempt was rejected.
///
/// The `Display` strings are the user-facing messages, so classification and
/// message text cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// Server-side rejection tied to the username field.
    #[error("This username is currently blocked by the server.")]
    UsernameBlocked,
    /// Credential mismatch, not tied to any field.
    #[error("Invalid username or password. Please try again.")]
    InvalidCredentials,
    /// The check itself failed.
    #[error("An unexpected error occurred. Please try again later.")]
    Unexpected,
}

/// Run the simulated authentication check.
///
/// Sleeps for [`SIMULATED_DELAY`], then classifies against the fixed demo
/// outcomes. Once started the check always runs to completion; there is no
/// cancellation.
pub async fn check_credentials(credentials: &Credentials) -> Result<(), LoginError> {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(SIMULATED_DELAY).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(SIMULATED_DELAY).await;

    classify(credentials)
}

fn classify(credentials: &Credentials) -> Result<(), LoginError> {
    if credentials.username == "testuser" && credentials.password == "password123" {
        Ok(())
    } else if credentials.username == "erroruser" {
        Err(LoginError::UsernameBlocked)
    } else {
        Err(LoginError::InvalidCredentials)
    }
}
