// Client-side access to the identity server's admin REST API
//
// - Realm fetch/update for the login styles panel
// - Identity provider, authentication flow and organization linking calls
//   for the organization identity provider panel
// - Bearer token lookup delegated to an AccessTokenProvider

pub mod admin_client;
pub mod api;
pub mod errors;
pub mod token;
pub mod traits;
pub mod types;

pub use admin_client::{add_trailing_slash, AdminClient};
pub use errors::{ClientError, ClientResult};
pub use token::{AccessTokenProvider, SessionTokenProvider, StaticTokenProvider};
pub use traits::AdminApi;
pub use types::{
    AuthenticationFlow, IdentityProviderRepresentation, LinkIdpRequest, LinkIdpResponse,
    OrgRepresentation, RealmRepresentation, DISCOVERY_ORG_CONFIG_KEY, SYNC_MODE_CONFIG_KEY,
};
