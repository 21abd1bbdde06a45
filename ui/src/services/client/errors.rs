use thiserror::Error;

/// Errors raised by the admin REST client
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// Request never produced a response
    #[error("Network error: {message}")]
    Network { message: String },

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}: {body}")]
    Http {
        url: String,
        status: u16,
        body: String,
    },

    /// Body could not be encoded or decoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Server answered successfully but reported a logical error in the body
    #[error("API error: {message}")]
    Api { message: String },

    /// No bearer token could be obtained
    #[error("Access token unavailable: {message}")]
    Token { message: String },
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Serialization {
                message: err.to_string(),
            }
        } else {
            ClientError::Network {
                message: err.to_string(),
            }
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
