//! Login page branding stored as realm attributes
//!
//! The realm's attribute bag is sparse: only keys under
//! `_providerConfig.assets.login.` belong to this panel, an absent key reads
//! as an empty field, and an emptied field deletes its key on save.

pub mod logic;
pub mod state;
pub mod types;
pub mod validation;

pub use logic::*;
pub use state::*;
pub use types::*;
pub use validation::*;
