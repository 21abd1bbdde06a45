use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Color,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Color => "color",
        }
    }
}

/// Class of an input given its validation state.
pub fn validation_class(invalid: bool) -> &'static str {
    if invalid {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    pub input_type: InputType,
    pub invalid: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            id: "{props.id}",
            "data-testid": "{props.id}",
            class: validation_class(props.invalid),
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            "aria-invalid": props.invalid,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedTextAreaProps {
    pub id: String,
    pub value: String,
    pub invalid: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedTextArea(props: ValidatedTextAreaProps) -> Element {
    rsx! {
        textarea {
            id: "{props.id}",
            "data-testid": "{props.id}",
            class: validation_class(props.invalid),
            rows: "8",
            value: "{props.value}",
            disabled: props.disabled,
            "aria-invalid": props.invalid,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
