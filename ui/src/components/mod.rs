//! Small shared form controls.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;
