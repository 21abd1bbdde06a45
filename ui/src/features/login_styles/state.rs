use super::types::{LoginStyleField, LoginStylesForm};
use super::validation::LoginStyleErrors;
use crate::features::form_state::{FormDraft, FormPhase};
use crate::services::client::types::RealmRepresentation;

#[derive(Clone, Debug)]
pub enum LoginStylesAction {
    LoadStarted,
    /// Fetched realm becomes the merge base for the next save.
    Loaded(RealmRepresentation),
    LoadFailed(String),
    SetField(LoginStyleField, String),
    Reset,
    ValidationFailed(LoginStyleErrors),
    SubmitStarted,
    /// Carries the realm exactly as it was sent.
    SaveSucceeded(RealmRepresentation),
    SaveFailed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginStylesState {
    pub phase: FormPhase,
    pub snapshot: Option<RealmRepresentation>,
    pub draft: FormDraft<LoginStylesForm>,
    pub errors: LoginStyleErrors,
    pub load_error: Option<String>,
}

impl LoginStylesState {
    pub fn values(&self) -> &LoginStylesForm {
        self.draft.current()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn can_reset(&self) -> bool {
        self.draft.is_dirty() && !self.phase.is_busy()
    }

    /// Marks the form as submitting. Returns `false` if a save is already
    /// in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.reduce_in_place(LoginStylesAction::SubmitStarted);
        true
    }

    pub fn field_has_error(&self, field: LoginStyleField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn reduce_in_place(&mut self, action: LoginStylesAction) {
        match action {
            LoginStylesAction::LoadStarted => {
                self.phase = FormPhase::Loading;
                self.load_error = None;
            }
            LoginStylesAction::Loaded(realm) => {
                let styles = super::logic::read_login_styles(&realm);
                self.draft.rebase(LoginStylesForm::from(&styles));
                self.snapshot = Some(realm);
                self.errors.clear();
                self.phase = FormPhase::Idle;
            }
            LoginStylesAction::LoadFailed(message) => {
                self.load_error = Some(message);
                self.phase = FormPhase::Idle;
            }
            LoginStylesAction::SetField(field, value) => {
                self.draft.current_mut().set(field, value);
                self.errors.remove(&field);
            }
            LoginStylesAction::Reset => {
                self.draft.reset();
                self.errors.clear();
            }
            LoginStylesAction::ValidationFailed(errors) => {
                self.errors = errors;
            }
            LoginStylesAction::SubmitStarted => {
                self.errors.clear();
                self.phase = FormPhase::Submitting;
            }
            LoginStylesAction::SaveSucceeded(realm) => {
                self.snapshot = Some(realm);
                self.draft.commit();
                self.phase = FormPhase::Idle;
            }
            LoginStylesAction::SaveFailed(_) => {
                self.phase = FormPhase::Idle;
            }
        }
    }
}
