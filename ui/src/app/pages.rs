use dioxus::prelude::*;

use super::context::use_console;
use crate::components::display::LoadingIndicator;
use crate::components::forms::{LoginStylesPanel, OrgIdentityProvidersPanel};
use crate::console_error;
use crate::features::alerts::Notifier;
use crate::services::client::OrgRepresentation;

/// Realm login page branding.
#[component]
pub fn LoginStylesPage() -> Element {
    let mut revision = use_signal(|| 0u64);

    rsx! {
        LoginStylesPanel {
            revision: revision(),
            refresh: move |_| revision += 1
        }
    }
}

/// Identity provider assignment for one organization. Refreshing re-fetches
/// the organization and then reloads the panel.
#[component]
pub fn OrganizationPage(org_id: ReadOnlySignal<String>) -> Element {
    let console = use_console();
    let mut org = use_signal(|| None::<OrgRepresentation>);
    let mut org_revision = use_signal(|| 0u64);
    let mut revision = use_signal(|| 0u64);

    let load_console = console.clone();
    use_effect(move || {
        let _ = org_revision();
        let id = org_id();
        let api = load_console.api.clone();
        let realm = load_console.config.realm.clone();
        let alerts = load_console.alerts;

        spawn(async move {
            match api.fetch_organization(&realm, &id).await {
                Ok(fetched) => {
                    org.set(Some(fetched));
                    revision += 1;
                }
                Err(e) => {
                    console_error!("[Organization] Could not load {}: {}", id, e);
                    alerts.add_error("Could not load organization", &e.to_string());
                }
            }
        });
    });

    let Some(current) = org() else {
        return rsx! {
            LoadingIndicator { message: "Loading organization...".to_string() }
        };
    };

    rsx! {
        section {
            class: "page-section",
            h2 { class: "panel-title", "{current.display_name}" }
            OrgIdentityProvidersPanel {
                org: current.clone(),
                revision: revision(),
                refresh: move |_| org_revision += 1
            }
        }
    }
}
