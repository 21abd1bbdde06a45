use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label of the placeholder option heading both pickers.
pub const SELECT_ONE_LABEL: &str = "Select one";

pub const LINK_FAILURE_MESSAGE: &str = "IdP failed to update for this org. Please try again.";

/// Title used when the link call succeeds without a message.
pub const LINK_SUCCESS_FALLBACK: &str = "Identity provider linked to organization.";

/// How user data is kept in step with the external identity provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SyncMode {
    #[default]
    Force,
    Import,
    Legacy,
}

impl SyncMode {
    /// Picker order.
    pub const OPTIONS: [SyncMode; 3] = [SyncMode::Force, SyncMode::Legacy, SyncMode::Import];

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncMode::Force => "FORCE",
            SyncMode::Import => "IMPORT",
            SyncMode::Legacy => "LEGACY",
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FORCE" => Ok(SyncMode::Force),
            "IMPORT" => Ok(SyncMode::Import),
            "LEGACY" => Ok(SyncMode::Legacy),
            other => Err(format!("Unknown sync mode: {}", other)),
        }
    }
}

/// Draft bound to the organization identity provider form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdpFormValues {
    /// Internal id of the chosen provider; `None` is the placeholder.
    pub idp_selector: Option<String>,
    pub post_broker_login_flow_alias: String,
    /// `None` is the "Select one" sentinel.
    pub sync_mode: Option<SyncMode>,
}

impl IdpFormValues {
    pub fn with_defaults(post_broker_flow: &str) -> Self {
        Self {
            idp_selector: None,
            post_broker_login_flow_alias: post_broker_flow.to_string(),
            sync_mode: Some(SyncMode::default()),
        }
    }
}

/// Entry of the identity provider picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdpOption {
    /// Internal id of the provider.
    pub value: String,
    pub label: String,
}

/// Result of one link attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked { message: String },
    Failed { reason: String },
}
