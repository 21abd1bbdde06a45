//! Active-association lookup, candidate filtering and the link round trip.

use tracing::{error, info, warn};

use super::state::{OrgIdpAction, OrgIdpLoad};
use super::types::*;
use crate::features::errors::FormError;
use crate::services::client::traits::AdminApi;
use crate::services::client::types::*;

/// The provider currently driving discovery for `org_id`: the first linked
/// provider tagged with this organization that is enabled.
pub fn find_active_idp<'a>(
    linked: &'a [IdentityProviderRepresentation],
    org_id: &str,
) -> Option<&'a IdentityProviderRepresentation> {
    linked
        .iter()
        .find(|idp| idp.enabled && idp.discovery_org() == Some(org_id))
}

/// Picker label: `"Display (alias)"` or `"alias"`, plus `" - Org"` when the
/// provider is already discovery-tagged.
pub fn idp_label(idp: &IdentityProviderRepresentation, org: &OrgRepresentation) -> String {
    let label = match idp.display_name.as_deref().filter(|name| !name.is_empty()) {
        Some(display_name) => format!("{} ({})", display_name, idp.alias),
        None => idp.alias.clone(),
    };

    if idp.discovery_org().is_some() {
        format!("{} - {}", label, org.display_name)
    } else {
        label
    }
}

/// Providers that may be chosen: the active one is shown separately, and
/// providers tagged with another organization belong to that tenant.
pub fn eligible_idps<'a>(
    identity_providers: &'a [IdentityProviderRepresentation],
    active: Option<&IdentityProviderRepresentation>,
    org: &OrgRepresentation,
) -> Vec<&'a IdentityProviderRepresentation> {
    let active_id = active.and_then(|idp| idp.internal_id.as_deref());

    identity_providers
        .iter()
        .filter(|idp| active_id.is_none() || idp.internal_id.as_deref() != active_id)
        .filter(|idp| match idp.discovery_org() {
            None => true,
            Some(tagged) => tagged == org.id,
        })
        .collect()
}

pub fn idp_options(
    identity_providers: &[IdentityProviderRepresentation],
    active: Option<&IdentityProviderRepresentation>,
    org: &OrgRepresentation,
) -> Vec<IdpOption> {
    eligible_idps(identity_providers, active, org)
        .into_iter()
        .filter_map(|idp| {
            idp.internal_id.as_ref().map(|id| IdpOption {
                value: id.clone(),
                label: idp_label(idp, org),
            })
        })
        .collect()
}

/// Draft values preloaded from the active provider, or the defaults.
pub fn values_for_active(
    active: Option<&IdentityProviderRepresentation>,
    defaults: &IdpFormValues,
) -> IdpFormValues {
    let mut values = defaults.clone();
    let Some(idp) = active else {
        return values;
    };

    values.idp_selector = idp.internal_id.clone();
    if let Some(flow) = idp.post_broker_login_flow_alias.as_ref().filter(|f| !f.is_empty()) {
        values.post_broker_login_flow_alias = flow.clone();
    }
    if let Some(mode) = idp.sync_mode() {
        match mode.parse::<SyncMode>() {
            Ok(mode) => values.sync_mode = Some(mode),
            Err(e) => warn!("Ignoring sync mode of {}: {}", idp.alias, e),
        }
    }
    values
}

/// Resolves the selected provider and builds the link request body.
pub fn build_link_request(
    identity_providers: &[IdentityProviderRepresentation],
    values: &IdpFormValues,
) -> Result<LinkIdpRequest, FormError> {
    let selected = values.idp_selector.as_deref().ok_or(FormError::NoSelection)?;

    let idp = identity_providers
        .iter()
        .find(|idp| idp.internal_id.as_deref() == Some(selected))
        .ok_or_else(|| FormError::UnknownSelection {
            id: selected.to_string(),
        })?;

    Ok(LinkIdpRequest {
        alias: idp.alias.clone(),
        post_broker_flow: values.post_broker_login_flow_alias.clone(),
        sync_mode: values.sync_mode.map(|mode| mode.as_str().to_string()),
    })
}

/// Deep link to the provider's settings page in the admin console.
pub fn idp_settings_link(realm: &str, idp: &IdentityProviderRepresentation) -> String {
    format!(
        "?realm={realm}#/{realm}/identity-providers/{provider}/{alias}/settings",
        realm = realm,
        provider = idp.provider_id.as_deref().unwrap_or_default(),
        alias = idp.alias,
    )
}

/// Issues the three reads concurrently. A failed read is logged and leaves
/// its part of the screen empty.
pub async fn load_org_identity_providers(
    api: &dyn AdminApi,
    realm: &str,
    org_id: &str,
    dispatch: impl Fn(OrgIdpAction),
) {
    dispatch(OrgIdpAction::LoadStarted);

    let (identity_providers, flows, linked) = futures::join!(
        api.list_identity_providers(realm),
        api.list_authentication_flows(realm),
        api.list_linked_providers(realm, org_id),
    );

    let identity_providers = identity_providers.unwrap_or_else(|e| {
        error!("Error fetching identity providers for {}: {}", realm, e);
        Vec::new()
    });
    let flows = flows.unwrap_or_else(|e| {
        error!("Error fetching authentication flows for {}: {}", realm, e);
        Vec::new()
    });
    let linked = linked.unwrap_or_else(|e| {
        error!("Error fetching org IdPs for {}: {}", org_id, e);
        Vec::new()
    });

    info!(
        "Loaded {} identity providers, {} flows, {} linked providers",
        identity_providers.len(),
        flows.len(),
        linked.len()
    );

    dispatch(OrgIdpAction::Loaded(OrgIdpLoad {
        identity_providers,
        flow_aliases: flows.into_iter().map(|flow| flow.alias).collect(),
        linked,
    }));
}

/// Sends one link request. `refresh` runs whatever the outcome.
pub async fn submit_idp_link(
    api: &dyn AdminApi,
    realm: &str,
    org_id: &str,
    request: LinkIdpRequest,
    dispatch: impl Fn(OrgIdpAction),
    refresh: impl FnOnce(),
) {
    dispatch(OrgIdpAction::SubmitStarted);

    let outcome = match api.link_provider_to_org(realm, org_id, &request).await {
        Ok(LinkIdpResponse {
            error: Some(reason), ..
        }) => {
            error!("Error during IdP assignment: {}", reason);
            LinkOutcome::Failed { reason }
        }
        Ok(response) => {
            info!("Linked {} to organization {}", request.alias, org_id);
            LinkOutcome::Linked {
                message: response
                    .message
                    .unwrap_or_else(|| LINK_SUCCESS_FALLBACK.to_string()),
            }
        }
        Err(e) => {
            error!("Error during IdP assignment: {}", e);
            LinkOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    dispatch(OrgIdpAction::SubmitFinished(outcome));
    refresh();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::alerts::AlertVariant;
    use crate::features::form_state::FormPhase;
    use crate::features::org_identity_providers::state::OrgIdpState;
    use crate::features::test_support::{idp, tagged_idp, FakeAdminApi};
    use crate::services::client::errors::ClientError;
    use std::cell::{Cell, RefCell};

    fn org() -> OrgRepresentation {
        OrgRepresentation {
            id: "org-1".to_string(),
            display_name: "Acme".to_string(),
        }
    }

    #[test]
    fn test_no_linked_providers_means_no_active() {
        assert_eq!(find_active_idp(&[], "org-1"), None);
    }

    #[test]
    fn test_active_requires_tag_and_enabled() {
        let mut disabled = tagged_idp("okta", "1", "org-1");
        disabled.enabled = false;
        let other_org = tagged_idp("azure", "2", "org-2");
        let active = tagged_idp("google", "3", "org-1");

        let linked = vec![disabled, other_org, active.clone()];
        assert_eq!(find_active_idp(&linked, "org-1"), Some(&active));
        assert_eq!(find_active_idp(&linked[..2], "org-1"), None);
    }

    #[test]
    fn test_options_without_active_exclude_other_tenants() {
        let providers = vec![
            idp("github", "1"),
            tagged_idp("okta", "2", "org-1"),
            tagged_idp("azure", "3", "org-2"),
        ];

        let options = idp_options(&providers, None, &org());
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["1", "2"]);
    }

    #[test]
    fn test_active_is_not_selectable() {
        let active = tagged_idp("okta", "2", "org-1");
        let providers = vec![idp("github", "1"), active.clone()];

        let options = idp_options(&providers, Some(&active), &org());
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "1");
    }

    #[test]
    fn test_labels() {
        let mut named = idp("okta", "1");
        named.display_name = Some("Okta SSO".to_string());
        assert_eq!(idp_label(&named, &org()), "Okta SSO (okta)");

        assert_eq!(idp_label(&idp("github", "2"), &org()), "github");

        let tagged = tagged_idp("google", "3", "org-1");
        assert_eq!(idp_label(&tagged, &org()), "google - Acme");
    }

    #[test]
    fn test_values_for_active_preload() {
        let defaults = IdpFormValues::with_defaults("post org broker login");
        assert_eq!(values_for_active(None, &defaults), defaults);

        let mut active = tagged_idp("okta", "2", "org-1");
        active.post_broker_login_flow_alias = Some("custom flow".to_string());
        active
            .config
            .insert(SYNC_MODE_CONFIG_KEY.to_string(), "IMPORT".to_string());

        let values = values_for_active(Some(&active), &defaults);
        assert_eq!(values.idp_selector.as_deref(), Some("2"));
        assert_eq!(values.post_broker_login_flow_alias, "custom flow");
        assert_eq!(values.sync_mode, Some(SyncMode::Import));
    }

    #[test]
    fn test_build_link_request() {
        let providers = vec![idp("okta", "2")];
        let mut values = IdpFormValues::with_defaults("post org broker login");

        assert_eq!(build_link_request(&providers, &values), Err(FormError::NoSelection));

        values.idp_selector = Some("9".to_string());
        assert_eq!(
            build_link_request(&providers, &values),
            Err(FormError::UnknownSelection { id: "9".to_string() })
        );

        values.idp_selector = Some("2".to_string());
        let request = build_link_request(&providers, &values).unwrap();
        assert_eq!(request.alias, "okta");
        assert_eq!(request.post_broker_flow, "post org broker login");
        assert_eq!(request.sync_mode.as_deref(), Some("FORCE"));

        values.sync_mode = None;
        assert_eq!(build_link_request(&providers, &values).unwrap().sync_mode, None);
    }

    #[test]
    fn test_settings_link() {
        let provider = idp("okta", "2");
        assert_eq!(
            idp_settings_link("acme", &provider),
            "?realm=acme#/acme/identity-providers/oidc/okta/settings"
        );
    }

    async fn loaded_state(api: &FakeAdminApi) -> RefCell<OrgIdpState> {
        let state = RefCell::new(OrgIdpState::new(&org(), "post org broker login"));
        load_org_identity_providers(api, "acme", "org-1", |a| {
            state.borrow_mut().reduce_in_place(a)
        })
        .await;
        state
    }

    #[tokio::test]
    async fn test_load_preselects_active() {
        let mut active = tagged_idp("okta", "2", "org-1");
        active.post_broker_login_flow_alias = Some("first broker login".to_string());
        let api = FakeAdminApi {
            identity_providers: vec![idp("github", "1"), active.clone()],
            flows: vec![AuthenticationFlow {
                alias: "first broker login".to_string(),
                id: None,
            }],
            linked: vec![active.clone()],
            ..Default::default()
        };

        let state = loaded_state(&api).await;
        let state = state.borrow();
        assert_eq!(state.phase, FormPhase::Idle);
        assert_eq!(state.active.as_ref(), Some(&active));
        assert_eq!(state.values().idp_selector.as_deref(), Some("2"));
        assert_eq!(state.values().post_broker_login_flow_alias, "first broker login");
        assert_eq!(state.flow_aliases, vec!["first broker login".to_string()]);
        assert_eq!(state.options().len(), 1);
        assert!(!state.can_reset());
    }

    #[tokio::test]
    async fn test_failed_reads_render_empty_state() {
        let api = FakeAdminApi {
            fail_reads: true,
            ..Default::default()
        };

        let state = loaded_state(&api).await;
        let state = state.borrow();
        assert_eq!(state.phase, FormPhase::Idle);
        assert!(state.identity_providers.is_empty());
        assert!(state.active.is_none());
        assert_eq!(state.values(), &IdpFormValues::with_defaults("post org broker login"));
    }

    #[tokio::test]
    async fn test_successful_link_appends_one_success_alert() {
        let api = FakeAdminApi {
            identity_providers: vec![idp("okta", "2")],
            ..Default::default()
        };
        let state = loaded_state(&api).await;
        let refreshed = Cell::new(0);

        let request = {
            let mut s = state.borrow_mut();
            s.reduce_in_place(OrgIdpAction::SelectIdp(Some("2".to_string())));
            build_link_request(&s.identity_providers, s.values()).unwrap()
        };

        submit_idp_link(
            &api,
            "acme",
            "org-1",
            request,
            |a| state.borrow_mut().reduce_in_place(a),
            || refreshed.set(refreshed.get() + 1),
        )
        .await;

        assert_eq!(refreshed.get(), 1);
        assert_eq!(api.link_requests.borrow().len(), 1);
        let state = state.borrow();
        assert_eq!(state.alerts.len(), 1);
        assert_eq!(state.alerts.alerts()[0].variant, AlertVariant::Success);
        assert_eq!(state.alerts.alerts()[0].title, "IdP linked");
        assert_eq!(state.phase, FormPhase::Idle);
    }

    #[tokio::test]
    async fn test_logical_error_still_refreshes() {
        let api = FakeAdminApi {
            identity_providers: vec![idp("okta", "2")],
            link_response: RefCell::new(Some(Ok(LinkIdpResponse {
                message: None,
                error: Some("IdP already linked".to_string()),
            }))),
            ..Default::default()
        };
        let state = loaded_state(&api).await;
        let refreshed = Cell::new(0);

        state
            .borrow_mut()
            .reduce_in_place(OrgIdpAction::SelectIdp(Some("2".to_string())));
        let submitted = state.borrow().values().clone();
        let request = build_link_request(&api.identity_providers, &submitted).unwrap();

        submit_idp_link(
            &api,
            "acme",
            "org-1",
            request,
            |a| state.borrow_mut().reduce_in_place(a),
            || refreshed.set(refreshed.get() + 1),
        )
        .await;

        assert_eq!(refreshed.get(), 1);
        let state = state.borrow();
        assert_eq!(state.alerts.len(), 1);
        assert_eq!(state.alerts.alerts()[0].variant, AlertVariant::Danger);
        assert_eq!(state.alerts.alerts()[0].title, LINK_FAILURE_MESSAGE);
        assert_eq!(state.values(), &submitted);
    }

    #[tokio::test]
    async fn test_reload_after_failed_link_keeps_submitted_draft() {
        let api = FakeAdminApi {
            identity_providers: vec![idp("github", "1"), idp("okta", "2")],
            link_response: RefCell::new(Some(Ok(LinkIdpResponse {
                message: None,
                error: Some("nope".to_string()),
            }))),
            ..Default::default()
        };
        let state = loaded_state(&api).await;

        {
            let mut s = state.borrow_mut();
            s.reduce_in_place(OrgIdpAction::SelectIdp(Some("2".to_string())));
            s.reduce_in_place(OrgIdpAction::SetSyncMode(Some(SyncMode::Import)));
        }
        let submitted = state.borrow().values().clone();
        let request = build_link_request(&api.identity_providers, &submitted).unwrap();

        let reloads = Cell::new(0);
        submit_idp_link(
            &api,
            "acme",
            "org-1",
            request,
            |a| state.borrow_mut().reduce_in_place(a),
            || reloads.set(reloads.get() + 1),
        )
        .await;
        assert_eq!(reloads.get(), 1);

        load_org_identity_providers(&api, "acme", "org-1", |a| {
            state.borrow_mut().reduce_in_place(a)
        })
        .await;

        let state = state.borrow();
        assert_eq!(state.phase, FormPhase::Idle);
        assert_eq!(state.values(), &submitted);
        assert_eq!(state.alerts.len(), 1);
        assert!(state.can_reset());
    }

    #[tokio::test]
    async fn test_transport_error_still_refreshes() {
        let api = FakeAdminApi {
            identity_providers: vec![idp("okta", "2")],
            link_response: RefCell::new(Some(Err(ClientError::Network {
                message: "offline".to_string(),
            }))),
            ..Default::default()
        };
        let state = loaded_state(&api).await;
        let refreshed = Cell::new(0);

        let request = LinkIdpRequest {
            alias: "okta".to_string(),
            post_broker_flow: "post org broker login".to_string(),
            sync_mode: Some("FORCE".to_string()),
        };
        submit_idp_link(
            &api,
            "acme",
            "org-1",
            request,
            |a| state.borrow_mut().reduce_in_place(a),
            || refreshed.set(refreshed.get() + 1),
        )
        .await;

        assert_eq!(refreshed.get(), 1);
        assert_eq!(state.borrow().alerts.len(), 1);
        assert_eq!(
            state.borrow().alerts.alerts()[0].variant,
            AlertVariant::Danger
        );
    }
}
