//! Configuration for the realm console
//!
//! A single [`ConsoleConfig`] carries the server location, target realm and
//! UI timings. It is read once by the console shell and shared through the
//! Dioxus context.

mod console_config;

pub use console_config::*;
