//! Translation provider client.
//!
//! The provider is an opaque collaborator: a single call that either yields
//! translated text or fails. The orchestrator only needs to distinguish
//! throttling from everything else, so the error taxonomy is typed.

/// HTTP client for a google-translate-compatible endpoint.
pub mod client;

pub use client::{DEFAULT_ENDPOINT, ProviderError, Translator};
