//! Admin REST endpoints, one module per resource
//!
//! - **realms**: realm fetch and update
//! - **identity_providers**: realm-level identity provider listing
//! - **authentication**: authentication flow listing
//! - **organizations**: organization-scoped identity provider linking

pub mod authentication;
pub mod identity_providers;
pub mod organizations;
pub mod realms;
