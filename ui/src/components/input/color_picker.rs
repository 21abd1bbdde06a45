use dioxus::prelude::*;

use super::validated_input::{InputType, ValidatedInput};

/// Value a native `<input type="color">` accepts: `#rrggbb`, lowercase.
/// Short forms are expanded; anything else shows as black.
pub fn picker_value(color: &str) -> String {
    let digits = color.strip_prefix('#').unwrap_or_default();
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return "#000000".to_string();
    }

    match digits.len() {
        6 => format!("#{}", digits.to_ascii_lowercase()),
        3 => {
            let expanded: String = digits
                .to_ascii_lowercase()
                .chars()
                .flat_map(|c| [c, c])
                .collect();
            format!("#{}", expanded)
        }
        _ => "#000000".to_string(),
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ColorPickerProps {
    pub id: String,
    pub color: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ColorPicker(props: ColorPickerProps) -> Element {
    rsx! {
        ValidatedInput {
            id: format!("{}-picker", props.id),
            value: picker_value(&props.color),
            input_type: InputType::Color,
            invalid: false,
            disabled: props.disabled,
            on_change: props.on_change
        }
    }
}
