//! Linking an external identity provider to an organization
//!
//! An organization has at most one active provider: the first linked
//! provider that is enabled and discovery-tagged with the organization's id.
//! The picker offers every other provider not claimed by another
//! organization.

pub mod logic;
pub mod state;
pub mod types;

pub use logic::*;
pub use state::*;
pub use types::*;
