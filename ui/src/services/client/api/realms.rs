use tracing::{info, instrument};

use crate::services::client::errors::{ClientError, ClientResult};
use crate::services::client::types::RealmRepresentation;
use crate::services::client::AdminClient;

pub fn realm_path(realm: &str) -> String {
    format!("admin/realms/{}", realm)
}

#[instrument(skip(client), err)]
pub async fn fetch_realm_impl(client: &AdminClient, realm: &str) -> ClientResult<RealmRepresentation> {
    let url = client.endpoint(&realm_path(realm));
    let representation: RealmRepresentation = client.get_json(&url).await?;
    info!("Fetched realm {}", realm);
    Ok(representation)
}

#[instrument(skip(client, representation), err)]
pub async fn update_realm_impl(
    client: &AdminClient,
    realm: &str,
    representation: &RealmRepresentation,
) -> ClientResult<()> {
    let url = client.endpoint(&realm_path(realm));

    let request = client
        .authorized(client.http_client.put(&url).json(representation))
        .await?;
    let response = request.send().await.map_err(|e| ClientError::Network {
        message: format!("Failed to update realm: {}", e),
    })?;
    AdminClient::check_status(&url, response).await?;

    info!("Updated realm {}", realm);
    Ok(())
}
