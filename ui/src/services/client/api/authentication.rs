use tracing::{instrument, warn};

use crate::services::client::errors::ClientResult;
use crate::services::client::types::AuthenticationFlow;
use crate::services::client::AdminClient;

/// Lists authentication flows through the admin UI extension endpoint.
///
/// A `null` body is treated as "no flows".
#[instrument(skip(client), err)]
pub async fn list_authentication_flows_impl(
    client: &AdminClient,
    realm: &str,
) -> ClientResult<Vec<AuthenticationFlow>> {
    let url = client.endpoint(&format!(
        "admin/realms/{}/ui-ext/authentication-management/flows",
        realm
    ));
    let flows: Option<Vec<AuthenticationFlow>> = client.get_json(&url).await?;
    if flows.is_none() {
        warn!("Flow listing for realm {} returned no body", realm);
    }
    Ok(flows.unwrap_or_default())
}
