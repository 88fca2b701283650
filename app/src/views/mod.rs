mod login;
pub use login::Login;
