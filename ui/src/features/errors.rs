use thiserror::Error;

/// Client-side validation failures. These never reach the network layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a hex color like #fff or #1a2b3c, got '{value}'")]
    InvalidHexColor { field: &'static str, value: String },

    #[error("Select an identity provider")]
    NoSelection,

    #[error("Identity provider {id} is no longer available")]
    UnknownSelection { id: String },
}
