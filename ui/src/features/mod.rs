//! Console features
//!
//! Framework-free state and logic behind the panels:
//!
//! - **login_styles**: realm attribute bag ⇄ login branding form
//! - **org_identity_providers**: organization ⇄ identity provider linking
//! - **form_state**: draft/baseline bookkeeping and the form lifecycle
//! - **alerts**: notification queue with monotonic ids
//! - **errors**: client-side validation errors
//!
//! Each feature exposes a state struct with `reduce_in_place` plus async
//! functions that drive the admin API and report back through a dispatch
//! callback, so components stay thin.

pub mod alerts;
pub mod errors;
pub mod form_state;
pub mod login_styles;
pub mod org_identity_providers;

#[cfg(test)]
pub(crate) mod test_support;

pub use alerts::*;
pub use errors::FormError;
pub use form_state::*;
