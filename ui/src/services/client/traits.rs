use async_trait::async_trait;

use super::errors::ClientResult;
use super::types::*;

/// Remote administrative API consumed by the console panels.
///
/// `AdminClient` talks HTTP; tests plug in an in-memory double.
#[async_trait(?Send)]
pub trait AdminApi {
    async fn fetch_realm(&self, realm: &str) -> ClientResult<RealmRepresentation>;

    async fn update_realm(&self, realm: &str, representation: &RealmRepresentation)
        -> ClientResult<()>;

    async fn list_identity_providers(
        &self,
        realm: &str,
    ) -> ClientResult<Vec<IdentityProviderRepresentation>>;

    async fn list_authentication_flows(&self, realm: &str) -> ClientResult<Vec<AuthenticationFlow>>;

    /// Providers already linked to the organization. A logical error body is
    /// reported as `ClientError::Api`.
    async fn list_linked_providers(
        &self,
        realm: &str,
        org_id: &str,
    ) -> ClientResult<Vec<IdentityProviderRepresentation>>;

    /// Returns the raw response; a populated `error` field is not turned into
    /// an `Err` here.
    async fn link_provider_to_org(
        &self,
        realm: &str,
        org_id: &str,
        request: &LinkIdpRequest,
    ) -> ClientResult<LinkIdpResponse>;

    /// Organization entity from the organizations extension.
    async fn fetch_organization(&self, realm: &str, org_id: &str) -> ClientResult<OrgRepresentation>;
}
