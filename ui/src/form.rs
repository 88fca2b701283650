//! Form state and validation for the login form.

use serde::{Deserialize, Serialize};

use crate::auth::LoginError;

/// A validated username/password pair, ready to submit.
///
/// Only [`validate`] constructs one, so holding a `Credentials` means the
/// client-side rules already passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Per-field validation or server-rejection messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Validate raw field values.
///
/// Both rules are checked on every call, so a form with an empty username and a
/// short password reports both problems at once. Values are taken as typed; no
/// trimming.
pub fn validate(username: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let mut errors = FieldErrors::default();
    if username.is_empty() {
        errors.username = Some("Username is required.".to_string());
    }
    if password.chars().count() < 6 {
        errors.password = Some("Password must be at least 6 characters.".to_string());
    }
    if errors.is_empty() {
        Ok(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    } else {
        Err(errors)
    }
}

/// Transient state owned by the login form.
///
/// `root_error` holds messages not tied to any single field (wrong credentials,
/// unexpected failure); it is a dedicated field rather than a reserved key in
/// `field_errors`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub username: String,
    pub password: String,
    pub field_errors: FieldErrors,
    pub root_error: Option<String>,
    pub submitting: bool,
}

impl FormState {
    /// Clear all errors. Called at the start of every submit attempt.
    pub fn clear_errors(&mut self) {
        self.field_errors = FieldErrors::default();
        self.root_error = None;
    }

    /// Validate the current field values.
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        validate(&self.username, &self.password)
    }

    /// Begin a submit attempt.
    ///
    /// A no-op while an attempt is already in flight: the state is left
    /// untouched and no credentials are produced. Otherwise clears stale
    /// errors and validates; on success marks the form submitting and hands
    /// back the credentials to check, on failure stores the field errors.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.submitting {
            return None;
        }
        self.clear_errors();
        match self.validate() {
            Ok(credentials) => {
                self.submitting = true;
                Some(credentials)
            }
            Err(errors) => {
                self.field_errors = errors;
                None
            }
        }
    }

    /// Resolve a finished authentication attempt.
    ///
    /// `submitting` drops back to false before the result is inspected, so the
    /// form leaves the in-flight state no matter which branch was taken. A
    /// blocked username surfaces as a field error on `username`; everything
    /// else surfaces as the root error.
    pub fn resolve(&mut self, result: &Result<(), LoginError>) {
        self.submitting = false;
        match result {
            Ok(()) => {}
            Err(err @ LoginError::UsernameBlocked) => {
                self.field_errors.username = Some(err.to_string());
            }
            Err(err) => {
                self.root_error = Some(err.to_string());
            }
        }
    }
}
