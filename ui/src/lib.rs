//! Shared UI for the login demo workspace.

pub mod components;

mod form;
pub use form::{validate, Credentials, FieldErrors, FormState};

mod auth;
pub use auth::{check_credentials, LoginError, SIMULATED_DELAY};

mod login;
pub use login::LoginForm;
