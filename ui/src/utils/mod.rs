//! Cross-cutting helpers.
//!
//! - **console_macros**: browser console logging that degrades to `tracing`
//!   off wasm

pub mod console_macros;
