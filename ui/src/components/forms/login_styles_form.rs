//! Login page branding form

use dioxus::prelude::*;

use crate::app::context::use_console;
use crate::components::display::LoadingIndicator;
use crate::components::forms::SaveReset;
use crate::components::input::{ColorPicker, InputType, ValidatedInput, ValidatedTextArea};
use crate::features::alerts::Notifier;
use crate::features::form_state::FormPhase;
use crate::features::login_styles::*;
use crate::{console_error, console_info};

#[derive(Props, PartialEq, Clone)]
pub struct LoginStylesPanelProps {
    /// Bumped by the host to force a re-fetch.
    pub revision: ReadOnlySignal<u64>,
    pub refresh: EventHandler<()>,
}

#[component]
pub fn LoginStylesPanel(props: LoginStylesPanelProps) -> Element {
    let console = use_console();
    let mut state = use_signal(LoginStylesState::default);
    let alerts = console.alerts;
    let refresh = props.refresh;
    let revision = props.revision;

    let dispatch = EventHandler::new(move |action: LoginStylesAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let load_console = console.clone();
    use_effect(move || {
        let _ = revision();
        let api = load_console.api.clone();
        let realm = load_console.config.realm.clone();
        spawn(async move {
            load_login_styles(api.as_ref(), &realm, |action| dispatch.call(action)).await;
            if let Some(error) = state.peek().load_error.clone() {
                console_error!("[LoginStyles] Could not load realm {}: {}", realm, error);
            }
        });
    });

    let save_console = console.clone();
    let save = move |_| {
        let current = state();
        let Some(snapshot) = current.snapshot.clone() else {
            alerts.add_error(SAVE_FAILURE_MESSAGE, "Realm has not been loaded");
            return;
        };
        let form = current.values().clone();
        if let Err(errors) = validate_form(&form) {
            dispatch.call(LoginStylesAction::ValidationFailed(errors));
            return;
        }
        if !state.with_mut(|s| s.begin_submit()) {
            return;
        }
        let api = save_console.api.clone();
        let realm = save_console.config.realm.clone();

        console_info!("[LoginStyles] Saving login styles for realm {}", realm);
        spawn(async move {
            save_login_styles(
                api.as_ref(),
                &realm,
                &snapshot,
                &form,
                |action| dispatch.call(action),
                &alerts,
                || refresh.call(()),
            )
            .await;
        });
    };

    let current = state();
    if current.phase == FormPhase::Loading || current.phase == FormPhase::Unloaded {
        return rsx! {
            LoadingIndicator { message: "Loading login styles...".to_string() }
        };
    }

    rsx! {
        section {
            class: "page-section console-form",

            form {
                class: "form-horizontal",
                for field in LoginStyleField::ALL {
                    StyleFieldGroup {
                        key: "{field.key()}",
                        field: field,
                        value: current.values().get(field).to_string(),
                        invalid: current.field_has_error(field),
                        disabled: current.is_submitting(),
                        on_change: move |value: String| dispatch.call(LoginStylesAction::SetField(field, value))
                    }
                }

                SaveReset {
                    name: "generalStyles".to_string(),
                    is_saving: current.is_submitting(),
                    can_reset: current.can_reset(),
                    save: save,
                    reset: move |_| dispatch.call(LoginStylesAction::Reset)
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct StyleFieldGroupProps {
    field: LoginStyleField,
    value: String,
    invalid: bool,
    disabled: bool,
    on_change: EventHandler<String>,
}

#[component]
fn StyleFieldGroup(props: StyleFieldGroupProps) -> Element {
    let field = props.field;
    let id = field.input_id();

    rsx! {
        div {
            class: if props.invalid { "form-group has-error" } else { "form-group" },
            label {
                class: "input-label",
                r#for: "{id}",
                "{field.label()} *"
                span {
                    class: "help-icon",
                    title: "{field.help_text()}",
                    " ⓘ"
                }
            }
            if field.is_color() {
                div {
                    class: "flex-row",
                    ColorPicker {
                        id: id.clone(),
                        color: props.value.clone(),
                        disabled: props.disabled,
                        on_change: props.on_change
                    }
                    ValidatedInput {
                        id: id.clone(),
                        value: props.value.clone(),
                        placeholder: "#000000".to_string(),
                        input_type: InputType::Text,
                        invalid: props.invalid,
                        disabled: props.disabled,
                        on_change: props.on_change
                    }
                }
            } else {
                ValidatedTextArea {
                    id: id.clone(),
                    value: props.value.clone(),
                    invalid: props.invalid,
                    disabled: props.disabled,
                    on_change: props.on_change
                }
            }
            if props.invalid {
                div {
                    class: "helper-text error",
                    "{field.invalid_help_text()}"
                }
            }
        }
    }
}
