//! Organization endpoints of the organizations extension.
//!
//! These live under `/realms/{realm}/orgs`, not under `/admin`.

use tracing::{error, info, instrument};

use crate::services::client::errors::{ClientError, ClientResult};
use crate::services::client::types::*;
use crate::services::client::AdminClient;

pub fn org_idps_path(realm: &str, org_id: &str) -> String {
    format!("realms/{}/orgs/{}/idps", realm, org_id)
}

#[instrument(skip(client), err)]
pub async fn fetch_organization_impl(
    client: &AdminClient,
    realm: &str,
    org_id: &str,
) -> ClientResult<OrgRepresentation> {
    let url = client.endpoint(&format!("realms/{}/orgs/{}", realm, org_id));
    client.get_json(&url).await
}

#[instrument(skip(client), err)]
pub async fn list_linked_providers_impl(
    client: &AdminClient,
    realm: &str,
    org_id: &str,
) -> ClientResult<Vec<IdentityProviderRepresentation>> {
    let url = client.endpoint(&org_idps_path(realm, org_id));

    match client.get_json::<LinkedProvidersBody>(&url).await? {
        LinkedProvidersBody::Providers(providers) => {
            info!("Organization {} has {} linked providers", org_id, providers.len());
            Ok(providers)
        }
        LinkedProvidersBody::Error { error } => {
            error!("Linked provider listing for {} failed: {}", org_id, error);
            Err(ClientError::Api { message: error })
        }
    }
}

#[instrument(skip(client), err)]
pub async fn link_provider_to_org_impl(
    client: &AdminClient,
    realm: &str,
    org_id: &str,
    request: &LinkIdpRequest,
) -> ClientResult<LinkIdpResponse> {
    let url = client.endpoint(&format!("{}/link", org_idps_path(realm, org_id)));

    let builder = client
        .authorized(client.http_client.post(&url).json(request))
        .await?;
    let response = builder.send().await.map_err(|e| ClientError::Network {
        message: format!("Failed to link identity provider: {}", e),
    })?;
    let response = AdminClient::check_status(&url, response).await?;

    // Some deployments answer 201/204 without a body.
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(LinkIdpResponse::default());
    }
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_idps_path() {
        assert_eq!(org_idps_path("acme", "org-1"), "realms/acme/orgs/org-1/idps");
    }
}
