//! Organization identity provider form

use dioxus::prelude::*;

use crate::app::context::use_console;
use crate::components::display::{AlertGroup, LoadingIndicator};
use crate::components::forms::SaveReset;
use crate::components::input::{FormSelect, SelectOption};
use crate::console_warn;
use crate::features::form_state::FormPhase;
use crate::features::org_identity_providers::*;
use crate::services::client::OrgRepresentation;

#[derive(Props, PartialEq, Clone)]
pub struct OrgIdentityProvidersPanelProps {
    pub org: ReadOnlySignal<OrgRepresentation>,
    /// Bumped by the host to force a re-fetch.
    pub revision: ReadOnlySignal<u64>,
    pub refresh: EventHandler<()>,
}

#[component]
pub fn OrgIdentityProvidersPanel(props: OrgIdentityProvidersPanelProps) -> Element {
    let console = use_console();
    let org = props.org;
    let revision = props.revision;
    let refresh = props.refresh;

    let default_flow = console.config.default_post_broker_flow.clone();
    let mut state = use_signal(move || OrgIdpState::new(&org.peek(), &default_flow));

    let dispatch = EventHandler::new(move |action: OrgIdpAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let load_console = console.clone();
    use_effect(move || {
        let _ = revision();
        let current_org = org();
        dispatch.call(OrgIdpAction::SetOrg(current_org.clone()));

        let api = load_console.api.clone();
        let realm = load_console.config.realm.clone();
        spawn(async move {
            load_org_identity_providers(api.as_ref(), &realm, &current_org.id, |action| {
                dispatch.call(action)
            })
            .await;
        });
    });

    let save_console = console.clone();
    let save = move |_| {
        let current = state();
        let request = match build_link_request(&current.identity_providers, current.values()) {
            Ok(request) => request,
            Err(e) => {
                console_warn!("[OrgIdentityProviders] {}", e);
                dispatch.call(OrgIdpAction::ValidationFailed(e));
                return;
            }
        };
        if !state.with_mut(|s| s.begin_submit()) {
            return;
        }
        let api = save_console.api.clone();
        let realm = save_console.config.realm.clone();
        let org_id = current.org.id.clone();

        spawn(async move {
            submit_idp_link(
                api.as_ref(),
                &realm,
                &org_id,
                request,
                |action| dispatch.call(action),
                || refresh.call(()),
            )
            .await;
        });
    };

    let current = state();
    if matches!(current.phase, FormPhase::Unloaded | FormPhase::Loading)
        && current.identity_providers.is_empty()
    {
        return rsx! {
            LoadingIndicator { message: "Loading identity providers...".to_string() }
        };
    }

    if current.identity_providers.is_empty() {
        return rsx! {
            div {
                class: "page-section",
                h1 { class: "panel-title", "No identity providers available" }
            }
        };
    }

    let realm = console.config.realm.clone();
    let values = current.values().clone();
    let idp_options: Vec<SelectOption> = current
        .options()
        .into_iter()
        .map(|option| SelectOption::new(option.value, option.label))
        .collect();
    let flow_options = flow_select_options(&current.flow_aliases, &values.post_broker_login_flow_alias);
    let sync_options: Vec<SelectOption> = SyncMode::OPTIONS
        .iter()
        .map(|mode| SelectOption::new(mode.as_str(), mode.as_str()))
        .collect();

    rsx! {
        div {
            class: "page-section",

            AlertGroup {
                alerts: current.alerts.alerts().to_vec(),
                timeout_ms: console.config.alert_timeout_ms,
                on_dismiss: move |id| dispatch.call(OrgIdpAction::DismissAlert(id))
            }

            h1 {
                class: "panel-title",
                if let Some(active) = &current.active {
                    strong { "Identity provider assigned to organization" }
                    ": {active.display_name.clone().unwrap_or_default()} ({active.alias})"
                    a {
                        class: "link-button",
                        href: "{idp_settings_link(&realm, active)}",
                        "Edit"
                    }
                } else {
                    div { "No identity provider assigned" }
                }
            }

            form {
                class: "console-form",

                div {
                    class: "form-group",
                    label { class: "input-label", r#for: "idpSelector", "Identity Providers*" }
                    FormSelect {
                        id: "idpSelector".to_string(),
                        aria_label: "Identity Providers".to_string(),
                        value: values.idp_selector.clone().unwrap_or_default(),
                        options: idp_options,
                        placeholder: SELECT_ONE_LABEL.to_string(),
                        required: true,
                        invalid: current.error.is_some(),
                        disabled: current.is_submitting(),
                        on_change: move |value: String| {
                            let selection = (!value.is_empty()).then_some(value);
                            dispatch.call(OrgIdpAction::SelectIdp(selection));
                        }
                    }
                    if let Some(error) = &current.error {
                        div { class: "helper-text error", "{error}" }
                    }
                }

                div {
                    class: "form-group",
                    label { class: "input-label", r#for: "postBrokerLoginFlowAlias", "Post Broker Login" }
                    FormSelect {
                        id: "postBrokerLoginFlowAlias".to_string(),
                        aria_label: "Post Broker Login Flow Alias Input".to_string(),
                        value: values.post_broker_login_flow_alias.clone(),
                        options: flow_options,
                        disabled: current.is_submitting(),
                        on_change: move |value: String| dispatch.call(OrgIdpAction::SetPostBrokerFlow(value))
                    }
                }

                div {
                    class: "form-group",
                    label { class: "input-label", r#for: "syncMode", "Sync Mode" }
                    FormSelect {
                        id: "syncMode".to_string(),
                        aria_label: "SyncMode Input".to_string(),
                        value: values.sync_mode.map(|mode| mode.as_str().to_string()).unwrap_or_default(),
                        options: sync_options,
                        placeholder: SELECT_ONE_LABEL.to_string(),
                        disabled: current.is_submitting(),
                        on_change: move |value: String| {
                            dispatch.call(OrgIdpAction::SetSyncMode(value.parse::<SyncMode>().ok()));
                        }
                    }
                }

                SaveReset {
                    name: "orgIdentityProvider".to_string(),
                    is_saving: current.is_submitting(),
                    can_reset: current.can_reset(),
                    reset_label: "Cancel".to_string(),
                    save: save,
                    reset: move |_| dispatch.call(OrgIdpAction::Reset)
                }
            }
        }
    }
}

/// Flow picker entries; the current value is kept selectable even when the
/// server did not list it.
fn flow_select_options(flow_aliases: &[String], current: &str) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = flow_aliases
        .iter()
        .map(|alias| SelectOption::new(alias.as_str(), alias.as_str()))
        .collect();

    if !current.is_empty() && !flow_aliases.iter().any(|alias| alias == current) {
        options.insert(0, SelectOption::new(current, current));
    }
    options
}
