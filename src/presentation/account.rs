use crate::presentation::serialization::{epoch_millis, non_empty_string};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// An organization tracked in RelateIQ.
///
/// Accounts can have any kind of relationship with your company: they could be
/// leads, clients, former clients or partners of your organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, DisplaySimple, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier of the account within the organization
    #[serde(deserialize_with = "non_empty_string::deserialize")]
    pub id: String,
    /// Display name of the account
    #[serde(default)]
    pub name: String,
    /// Time of the last modification, UTC
    #[serde(rename = "modifiedDate", with = "epoch_millis")]
    pub modified_date: DateTime<Utc>,
}
