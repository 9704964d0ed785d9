/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # RelateIQ Client
//!
//! A typed client for the RelateIQ CRM HTTP API.
//!
//! The crate is organised in a few layers:
//!
//! - [`application::client`]: the transport client. It builds requests against the
//!   versioned API root, authenticates every request with HTTP Basic auth and decodes
//!   JSON responses.
//! - [`model::http`]: the raw response snapshot and the error mapper that turns
//!   non-2xx responses into [`error::ErrorResponse`] values.
//! - [`application::services`]: resource services built on top of the client.
//!   Currently only Accounts is available.
//! - [`presentation`]: the resource types returned by the API and the serde helpers
//!   used to encode them (epoch-millisecond timestamps, comma-joined lists).
//!
//! ## Example
//!
//! ```ignore
//! use relateiq_client::prelude::*;
//!
//! let client = Client::new(None, Credentials::new("key", "secret"));
//! let options = AccountsListOptions::default().with_limit(10);
//! let (accounts, _response) = client.accounts().list(&options).await?;
//! for account in accounts {
//!     println!("{} {}", account.id, account.name);
//! }
//! ```

/// Transport client, configuration and resource services
pub mod application;

/// Library wide constants
pub mod constants;

/// Error types returned by every operation of the client
pub mod error;

/// Request, response and HTTP helper models
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Resource types and serialization helpers
pub mod presentation;

/// Environment and logging utilities
pub mod utils;

/// Version of the library, taken from the package manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of the library
pub fn version() -> &'static str {
    VERSION
}
