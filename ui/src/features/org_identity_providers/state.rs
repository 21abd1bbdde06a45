use super::logic::{find_active_idp, idp_options, values_for_active};
use super::types::*;
use crate::features::alerts::{AlertId, AlertQueue, AlertVariant};
use crate::features::errors::FormError;
use crate::features::form_state::{FormDraft, FormPhase};
use crate::services::client::types::{IdentityProviderRepresentation, OrgRepresentation};

/// Results of the three mount-time reads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrgIdpLoad {
    pub identity_providers: Vec<IdentityProviderRepresentation>,
    pub flow_aliases: Vec<String>,
    pub linked: Vec<IdentityProviderRepresentation>,
}

#[derive(Clone, Debug)]
pub enum OrgIdpAction {
    SetOrg(OrgRepresentation),
    LoadStarted,
    Loaded(OrgIdpLoad),
    SelectIdp(Option<String>),
    SetPostBrokerFlow(String),
    SetSyncMode(Option<SyncMode>),
    Reset,
    ValidationFailed(FormError),
    SubmitStarted,
    SubmitFinished(LinkOutcome),
    DismissAlert(AlertId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrgIdpState {
    pub org: OrgRepresentation,
    pub phase: FormPhase,
    pub identity_providers: Vec<IdentityProviderRepresentation>,
    pub flow_aliases: Vec<String>,
    pub active: Option<IdentityProviderRepresentation>,
    pub defaults: IdpFormValues,
    pub draft: FormDraft<IdpFormValues>,
    pub error: Option<FormError>,
    pub alerts: AlertQueue,
    /// Set after a failed link so the following reload keeps the submitted draft.
    retain_draft: bool,
}

impl OrgIdpState {
    pub fn new(org: &OrgRepresentation, default_post_broker_flow: &str) -> Self {
        let defaults = IdpFormValues::with_defaults(default_post_broker_flow);
        Self {
            org: org.clone(),
            phase: FormPhase::Unloaded,
            identity_providers: Vec::new(),
            flow_aliases: Vec::new(),
            active: None,
            draft: FormDraft::new(defaults.clone()),
            defaults,
            error: None,
            alerts: AlertQueue::new(),
            retain_draft: false,
        }
    }

    pub fn values(&self) -> &IdpFormValues {
        self.draft.current()
    }

    /// Picker entries, excluding the active provider and other tenants' ones.
    pub fn options(&self) -> Vec<IdpOption> {
        idp_options(&self.identity_providers, self.active.as_ref(), &self.org)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn can_reset(&self) -> bool {
        self.draft.is_dirty() && !self.phase.is_busy()
    }

    /// Marks the form as submitting. Returns `false` if a submit is already
    /// in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.reduce_in_place(OrgIdpAction::SubmitStarted);
        true
    }

    pub fn reduce_in_place(&mut self, action: OrgIdpAction) {
        match action {
            OrgIdpAction::SetOrg(org) => {
                if org.id != self.org.id {
                    self.retain_draft = false;
                }
                self.org = org;
            }
            OrgIdpAction::LoadStarted => {
                self.phase = FormPhase::Loading;
            }
            OrgIdpAction::Loaded(load) => {
                self.active = find_active_idp(&load.linked, &self.org.id).cloned();
                let loaded = values_for_active(self.active.as_ref(), &self.defaults);
                if std::mem::take(&mut self.retain_draft) {
                    self.draft.rebase_baseline(loaded);
                } else {
                    self.draft.rebase(loaded);
                }
                self.identity_providers = load.identity_providers;
                self.flow_aliases = load.flow_aliases;
                self.error = None;
                self.phase = FormPhase::Idle;
            }
            OrgIdpAction::SelectIdp(selection) => {
                self.draft.current_mut().idp_selector = selection;
                self.error = None;
            }
            OrgIdpAction::SetPostBrokerFlow(flow) => {
                self.draft.current_mut().post_broker_login_flow_alias = flow;
            }
            OrgIdpAction::SetSyncMode(mode) => {
                self.draft.current_mut().sync_mode = mode;
            }
            OrgIdpAction::Reset => {
                self.draft.reset();
                self.retain_draft = false;
                self.error = None;
            }
            OrgIdpAction::ValidationFailed(error) => {
                self.error = Some(error);
            }
            OrgIdpAction::SubmitStarted => {
                self.error = None;
                self.phase = FormPhase::Submitting;
            }
            OrgIdpAction::SubmitFinished(outcome) => {
                match outcome {
                    LinkOutcome::Linked { message } => {
                        self.alerts.push(message, AlertVariant::Success);
                        self.draft.commit();
                        self.retain_draft = false;
                    }
                    LinkOutcome::Failed { .. } => {
                        self.alerts.push(LINK_FAILURE_MESSAGE, AlertVariant::Danger);
                        self.retain_draft = true;
                    }
                }
                self.phase = FormPhase::Idle;
            }
            OrgIdpAction::DismissAlert(id) => {
                self.alerts.dismiss(id);
            }
        }
    }
}
