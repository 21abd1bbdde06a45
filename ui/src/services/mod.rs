//! Infrastructure Services
//!
//! - **client**: admin REST client, API trait and representations
//! - **config**: console configuration and defaults
//!
//! The services are WASM-first, using browser APIs and async traits
//! without Send/Sync bounds.

pub mod client;
pub mod config;
