use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SaveResetProps {
    pub name: String,
    pub is_saving: bool,
    pub can_reset: bool,
    #[props(default = "Save".to_string())]
    pub save_label: String,
    #[props(default = "Revert".to_string())]
    pub reset_label: String,
    pub save: EventHandler<()>,
    pub reset: EventHandler<()>,
}

/// Save and reset controls under a form. Save is disabled while a request
/// is in flight; reset only while there is something to revert.
#[component]
pub fn SaveReset(props: SaveResetProps) -> Element {
    rsx! {
        div {
            class: "action-group",
            button {
                r#type: "button",
                class: "save-button",
                "data-testid": "{props.name}-save",
                disabled: props.is_saving,
                "aria-busy": props.is_saving,
                onclick: move |_| props.save.call(()),
                if props.is_saving {
                    span { class: "spinner", "⏳ " }
                }
                "{props.save_label}"
            }
            button {
                r#type: "button",
                class: "link-button",
                "data-testid": "{props.name}-revert",
                disabled: !props.can_reset,
                onclick: move |_| props.reset.call(()),
                "{props.reset_label}"
            }
        }
    }
}
