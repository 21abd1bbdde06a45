use tracing::{info, instrument};

use crate::services::client::errors::ClientResult;
use crate::services::client::types::IdentityProviderRepresentation;
use crate::services::client::AdminClient;

#[instrument(skip(client), err)]
pub async fn list_identity_providers_impl(
    client: &AdminClient,
    realm: &str,
) -> ClientResult<Vec<IdentityProviderRepresentation>> {
    let url = client.endpoint(&format!("admin/realms/{}/identity-provider/instances", realm));
    let providers: Vec<IdentityProviderRepresentation> = client.get_json(&url).await?;
    info!("Realm {} has {} identity providers", realm, providers.len());
    Ok(providers)
}
