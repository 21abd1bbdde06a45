use async_trait::async_trait;
use gloo_storage::{SessionStorage, Storage};
use tracing::warn;

use super::errors::{ClientError, ClientResult};

/// Supplies the bearer token attached to every admin API request.
///
/// The console does not own authentication; whoever hosts it hands in a
/// provider.
#[async_trait(?Send)]
pub trait AccessTokenProvider {
    async fn access_token(&self) -> ClientResult<String>;
}

/// Fixed token, mostly useful for development servers.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait(?Send)]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> ClientResult<String> {
        Ok(self.token.clone())
    }
}

/// Reads the token the hosting page keeps in `sessionStorage`.
#[derive(Clone)]
pub struct SessionTokenProvider {
    storage_key: String,
}

impl SessionTokenProvider {
    pub fn new(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl AccessTokenProvider for SessionTokenProvider {
    async fn access_token(&self) -> ClientResult<String> {
        match SessionStorage::get::<String>(&self.storage_key) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            Ok(_) => Err(ClientError::Token {
                message: format!("Token under '{}' is empty", self.storage_key),
            }),
            Err(e) => {
                warn!("No access token under '{}': {:?}", self.storage_key, e);
                Err(ClientError::Token {
                    message: format!("No token stored under '{}'", self.storage_key),
                })
            }
        }
    }
}
