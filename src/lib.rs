//! Yandex.Dictionary API client
//!
//! This library is a thin binding for the dictionary lookup web service: it
//! builds the request URL, performs a single GET, classifies the HTTP status,
//! and returns the raw response body. Response payloads are never parsed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use self::core::{
    client::DictionaryClient,
    config::ClientConfig,
    errors::{DictionaryError, Result, ServiceErrorKind},
    flags::LookupFlags,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
