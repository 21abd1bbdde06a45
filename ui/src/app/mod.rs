//! Application shell and the pages hosting the console panels.

pub mod console_shell;
pub mod context;
pub mod pages;

pub use console_shell::ConsoleShell;
pub use context::{use_console, use_console_provider, ConsoleContext};
pub use pages::{LoginStylesPage, OrganizationPage};
