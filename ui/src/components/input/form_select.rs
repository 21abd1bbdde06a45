use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FormSelectProps {
    pub id: String,
    pub aria_label: String,
    /// Selected value; empty selects the placeholder.
    pub value: String,
    pub options: Vec<SelectOption>,
    /// Leading option with an empty value.
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub required: bool,
    #[props(default)]
    pub invalid: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn FormSelect(props: FormSelectProps) -> Element {
    let selected = props.value.clone();

    rsx! {
        select {
            id: "{props.id}",
            class: if props.invalid { "form-select input-invalid" } else { "form-select" },
            "aria-label": "{props.aria_label}",
            "aria-invalid": props.invalid,
            required: props.required,
            disabled: props.disabled,
            onchange: move |event| props.on_change.call(event.value()),

            if let Some(placeholder) = &props.placeholder {
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "{placeholder}"
                }
            }
            for entry in props.options.iter() {
                option {
                    key: "{entry.value}",
                    value: "{entry.value}",
                    selected: entry.value == selected,
                    "{entry.label}"
                }
            }
        }
    }
}
