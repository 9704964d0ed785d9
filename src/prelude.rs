/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # RelateIQ Client Prelude
//!
//! Imports the types needed for most RelateIQ API interactions.
//!
//! ## Usage
//!
//! ```rust
//! use relateiq_client::prelude::*;
//!
//! let client = Client::new(None, Credentials::new("key", "secret"));
//! let options = AccountsListOptions::new().with_ids(["a", "b"]).with_limit(10);
//! # let _ = (client, options);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration and credentials
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Transport client
pub use crate::application::client::Client;

/// Accounts service
pub use crate::application::services::{AccountsApi, AccountsService};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, ErrorResponse, RiqResult};

// ============================================================================
// MODELS
// ============================================================================

/// Raw responses and error mapping
pub use crate::model::http::{ApiResponse, check_response};

/// Request options
pub use crate::model::requests::{AccountsListOptions, ListOptions};

/// Response envelopes
pub use crate::model::responses::ListEnvelope;

/// Resources
pub use crate::presentation::account::Account;

/// Serialization helpers
pub use crate::presentation::serialization::{
    comma_separated, epoch_millis, epoch_millis_opt, from_epoch_millis, null_as_empty_vec,
    to_epoch_millis,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
