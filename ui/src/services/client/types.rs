use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Config key that tags an identity provider with the organization it drives
/// home-IdP discovery for.
pub const DISCOVERY_ORG_CONFIG_KEY: &str = "home.idp.discovery.org";

/// Config key holding an identity provider's sync mode.
pub const SYNC_MODE_CONFIG_KEY: &str = "syncMode";

/// Realm representation as returned by `GET /admin/realms/{realm}`.
///
/// Only the attribute bag is modelled; everything else is carried through
/// `extra` so a PUT sends back exactly what was fetched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RealmRepresentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RealmRepresentation {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attributes| attributes.get(key))
            .map(String::as_str)
    }
}

/// Identity provider representation shared by the realm-level listing and the
/// organization's linked-provider listing.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderRepresentation {
    #[serde(default)]
    pub alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_broker_login_flow_alias: Option<String>,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

impl IdentityProviderRepresentation {
    /// Organization id this provider is discovery-tagged with, if any.
    pub fn discovery_org(&self) -> Option<&str> {
        self.config.get(DISCOVERY_ORG_CONFIG_KEY).map(String::as_str)
    }

    pub fn sync_mode(&self) -> Option<&str> {
        self.config.get(SYNC_MODE_CONFIG_KEY).map(String::as_str)
    }
}

/// Minimal view of an organization, supplied by the hosting screen.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrgRepresentation {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
}

/// Entry of the authentication flow listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthenticationFlow {
    pub alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Body of the "link identity provider to organization" request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LinkIdpRequest {
    pub alias: String,
    pub post_broker_flow: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_mode: Option<String>,
}

/// Response of the link call. The endpoint reports logical failures in
/// `error` with a 2xx status, so callers must check both fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LinkIdpResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// The linked-provider listing answers either with the list or an error body.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub(crate) enum LinkedProvidersBody {
    Providers(Vec<IdentityProviderRepresentation>),
    Error { error: String },
}
