use dioxus::prelude::*;

/// Styled text input. Controlled: the caller owns the value and feeds edits
/// back through `oninput`.
#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = String::new())] autocomplete: String,
    #[props(default = false)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            autocomplete: "{autocomplete}",
            disabled: disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
