//! In-memory `AdminApi` used by the feature tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::services::client::errors::{ClientError, ClientResult};
use crate::services::client::traits::AdminApi;
use crate::services::client::types::*;

#[derive(Default)]
pub struct FakeAdminApi {
    pub realm: RefCell<RealmRepresentation>,
    pub identity_providers: Vec<IdentityProviderRepresentation>,
    pub flows: Vec<AuthenticationFlow>,
    pub linked: Vec<IdentityProviderRepresentation>,
    pub organizations: BTreeMap<String, OrgRepresentation>,
    pub link_response: RefCell<Option<ClientResult<LinkIdpResponse>>>,
    pub fail_reads: bool,
    pub fail_update: bool,
    pub updates: RefCell<Vec<RealmRepresentation>>,
    pub link_requests: RefCell<Vec<LinkIdpRequest>>,
}

impl FakeAdminApi {
    fn read_failure() -> ClientError {
        ClientError::Network {
            message: "connection refused".to_string(),
        }
    }
}

#[async_trait(?Send)]
impl AdminApi for FakeAdminApi {
    async fn fetch_realm(&self, _realm: &str) -> ClientResult<RealmRepresentation> {
        if self.fail_reads {
            return Err(Self::read_failure());
        }
        Ok(self.realm.borrow().clone())
    }

    async fn update_realm(
        &self,
        _realm: &str,
        representation: &RealmRepresentation,
    ) -> ClientResult<()> {
        self.updates.borrow_mut().push(representation.clone());
        if self.fail_update {
            return Err(ClientError::Http {
                url: "admin/realms/acme".to_string(),
                status: 500,
                body: "boom".to_string(),
            });
        }
        *self.realm.borrow_mut() = representation.clone();
        Ok(())
    }

    async fn list_identity_providers(
        &self,
        _realm: &str,
    ) -> ClientResult<Vec<IdentityProviderRepresentation>> {
        if self.fail_reads {
            return Err(Self::read_failure());
        }
        Ok(self.identity_providers.clone())
    }

    async fn list_authentication_flows(&self, _realm: &str) -> ClientResult<Vec<AuthenticationFlow>> {
        if self.fail_reads {
            return Err(Self::read_failure());
        }
        Ok(self.flows.clone())
    }

    async fn list_linked_providers(
        &self,
        _realm: &str,
        _org_id: &str,
    ) -> ClientResult<Vec<IdentityProviderRepresentation>> {
        if self.fail_reads {
            return Err(ClientError::Api {
                message: "organization not found".to_string(),
            });
        }
        Ok(self.linked.clone())
    }

    async fn link_provider_to_org(
        &self,
        _realm: &str,
        _org_id: &str,
        request: &LinkIdpRequest,
    ) -> ClientResult<LinkIdpResponse> {
        self.link_requests.borrow_mut().push(request.clone());
        self.link_response
            .borrow_mut()
            .take()
            .unwrap_or_else(|| {
                Ok(LinkIdpResponse {
                    message: Some("IdP linked".to_string()),
                    error: None,
                })
            })
    }

    async fn fetch_organization(&self, _realm: &str, org_id: &str) -> ClientResult<OrgRepresentation> {
        self.organizations
            .get(org_id)
            .cloned()
            .ok_or_else(|| ClientError::Http {
                url: format!("realms/acme/orgs/{}", org_id),
                status: 404,
                body: String::new(),
            })
    }
}

pub fn idp(alias: &str, internal_id: &str) -> IdentityProviderRepresentation {
    IdentityProviderRepresentation {
        alias: alias.to_string(),
        internal_id: Some(internal_id.to_string()),
        provider_id: Some("oidc".to_string()),
        enabled: true,
        ..Default::default()
    }
}

pub fn tagged_idp(alias: &str, internal_id: &str, org_id: &str) -> IdentityProviderRepresentation {
    let mut provider = idp(alias, internal_id);
    provider
        .config
        .insert(DISCOVERY_ORG_CONFIG_KEY.to_string(), org_id.to_string());
    provider
}
