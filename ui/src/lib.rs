//! Realm administration console panels: login page branding and
//! organization identity provider assignment.

pub mod app;
pub use app::{ConsoleShell, LoginStylesPage, OrganizationPage};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
