//! Projection of the realm attribute bag into the login styles form and back.

use tracing::{error, info};

use super::state::LoginStylesAction;
use super::types::*;
use super::validation::validate_form;
use crate::features::alerts::{AlertVariant, Notifier};
use crate::services::client::traits::AdminApi;
use crate::services::client::types::RealmRepresentation;

/// Reads the four tracked attributes. Absent keys stay `None`.
pub fn read_login_styles(realm: &RealmRepresentation) -> LoginStyles {
    let mut styles = LoginStyles::default();
    for field in LoginStyleField::ALL {
        styles.set(
            field,
            realm.attribute(&field.attribute_key()).map(str::to_string),
        );
    }
    styles
}

/// Pure reducer producing the realm to PUT: present values overwrite their
/// key, absent or empty ones delete it. Everything else in `snapshot` is
/// carried over untouched.
pub fn apply_edits(snapshot: &RealmRepresentation, edits: &LoginStyles) -> RealmRepresentation {
    let mut updated = snapshot.clone();

    for field in LoginStyleField::ALL {
        let key = field.attribute_key();
        match edits.get(field).filter(|value| !value.is_empty()) {
            Some(value) => {
                updated
                    .attributes
                    .get_or_insert_with(Default::default)
                    .insert(key, value.to_string());
            }
            None => {
                if let Some(attributes) = updated.attributes.as_mut() {
                    attributes.remove(&key);
                }
            }
        }
    }

    updated
}

/// Fetches the realm and hands it to the form as its snapshot.
pub async fn load_login_styles(
    api: &dyn AdminApi,
    realm: &str,
    dispatch: impl Fn(LoginStylesAction),
) {
    dispatch(LoginStylesAction::LoadStarted);

    match api.fetch_realm(realm).await {
        Ok(representation) => {
            info!("Loaded login styles for realm {}", realm);
            dispatch(LoginStylesAction::Loaded(representation));
        }
        Err(e) => {
            error!("Could not load realm {}: {}", realm, e);
            dispatch(LoginStylesAction::LoadFailed(e.to_string()));
        }
    }
}

/// Validates the draft and, when it passes, writes it back in one update.
///
/// Validation failures are dispatched and nothing is sent. `refresh` runs
/// only after a successful update.
pub async fn save_login_styles(
    api: &dyn AdminApi,
    realm: &str,
    snapshot: &RealmRepresentation,
    form: &LoginStylesForm,
    dispatch: impl Fn(LoginStylesAction),
    notifier: &dyn Notifier,
    refresh: impl FnOnce(),
) {
    if let Err(errors) = validate_form(form) {
        dispatch(LoginStylesAction::ValidationFailed(errors));
        return;
    }

    dispatch(LoginStylesAction::SubmitStarted);
    let updated = apply_edits(snapshot, &form.to_styles());

    match api.update_realm(realm, &updated).await {
        Ok(()) => {
            info!("Saved login styles for realm {}", realm);
            dispatch(LoginStylesAction::SaveSucceeded(updated));
            notifier.add_alert(SAVE_SUCCESS_MESSAGE, AlertVariant::Success);
            refresh();
        }
        Err(e) => {
            error!("Could not update realm with attributes: {}", e);
            dispatch(LoginStylesAction::SaveFailed(e.to_string()));
            notifier.add_error(SAVE_FAILURE_MESSAGE, &e.to_string());
        }
    }
}
