use std::rc::Rc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{error, instrument};

use super::api;
use super::errors::{ClientError, ClientResult};
use super::token::AccessTokenProvider;
use super::traits::AdminApi;
use super::types::*;

/// Ensures the base URL ends in exactly one slash so paths can be appended.
pub fn add_trailing_slash(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}

/// HTTP client for the identity server's admin REST API
#[derive(Clone)]
pub struct AdminClient {
    pub(crate) http_client: Client,
    base_url: String,
    token_provider: Rc<dyn AccessTokenProvider>,
}

impl AdminClient {
    pub fn new(base_url: &str, token_provider: Rc<dyn AccessTokenProvider>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: add_trailing_slash(base_url),
            token_provider,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attaches the bearer token to a request.
    pub(crate) async fn authorized(&self, builder: RequestBuilder) -> ClientResult<RequestBuilder> {
        let token = self.token_provider.access_token().await?;
        Ok(builder.header("Authorization", format!("Bearer {}", token)))
    }

    /// Passes successful responses through and turns the rest into `ClientError::Http`.
    pub(crate) async fn check_status(url: &str, response: Response) -> ClientResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        error!("Request to {} failed with status {}: {}", url, status, body);
        Err(ClientError::Http {
            url: url.to_string(),
            status,
            body,
        })
    }

    #[instrument(skip(self), err)]
    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        let request = self.authorized(self.http_client.get(url)).await?;
        let response = request.send().await.map_err(|e| ClientError::Network {
            message: format!("GET {} failed: {}", url, e),
        })?;
        let response = Self::check_status(url, response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait(?Send)]
impl AdminApi for AdminClient {
    async fn fetch_realm(&self, realm: &str) -> ClientResult<RealmRepresentation> {
        api::realms::fetch_realm_impl(self, realm).await
    }

    async fn update_realm(
        &self,
        realm: &str,
        representation: &RealmRepresentation,
    ) -> ClientResult<()> {
        api::realms::update_realm_impl(self, realm, representation).await
    }

    async fn list_identity_providers(
        &self,
        realm: &str,
    ) -> ClientResult<Vec<IdentityProviderRepresentation>> {
        api::identity_providers::list_identity_providers_impl(self, realm).await
    }

    async fn list_authentication_flows(&self, realm: &str) -> ClientResult<Vec<AuthenticationFlow>> {
        api::authentication::list_authentication_flows_impl(self, realm).await
    }

    async fn list_linked_providers(
        &self,
        realm: &str,
        org_id: &str,
    ) -> ClientResult<Vec<IdentityProviderRepresentation>> {
        api::organizations::list_linked_providers_impl(self, realm, org_id).await
    }

    async fn link_provider_to_org(
        &self,
        realm: &str,
        org_id: &str,
        request: &LinkIdpRequest,
    ) -> ClientResult<LinkIdpResponse> {
        api::organizations::link_provider_to_org_impl(self, realm, org_id, request).await
    }

    async fn fetch_organization(&self, realm: &str, org_id: &str) -> ClientResult<OrgRepresentation> {
        api::organizations::fetch_organization_impl(self, realm, org_id).await
    }
}
