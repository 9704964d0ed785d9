/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::serialization::{comma_separated, is_zero};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Pagination options shared by every endpoint that returns a list.
///
/// A zero value means the option is unset and it is left out of the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct ListOptions {
    /// Offset of the first item to return
    #[serde(rename = "_start", default, skip_serializing_if = "is_zero")]
    pub start: u32,
    /// Maximum number of items to return
    #[serde(rename = "_limit", default, skip_serializing_if = "is_zero")]
    pub limit: u32,
}

impl ListOptions {
    /// Creates pagination options
    pub fn new(start: u32, limit: u32) -> Self {
        Self { start, limit }
    }

    /// Set the start offset
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Options for the page following this one, `None` when no limit is set
    pub fn next_page(&self) -> Option<Self> {
        if self.limit == 0 {
            return None;
        }
        Some(Self {
            start: self.start.saturating_add(self.limit),
            limit: self.limit,
        })
    }
}

/// Options for listing accounts
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct AccountsListOptions {
    /// Only return the accounts with these ids, sent as `_ids=a,b`
    #[serde(
        rename = "_ids",
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "comma_separated"
    )]
    pub ids: Vec<String>,
    /// Pagination
    #[serde(flatten)]
    pub page: ListOptions,
}

impl AccountsListOptions {
    /// Creates empty options, which list every account
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the listing to the given account ids
    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the pagination options
    pub fn with_page(mut self, page: ListOptions) -> Self {
        self.page = page;
        self
    }

    /// Set the start offset
    pub fn with_start(mut self, start: u32) -> Self {
        self.page.start = start;
        self
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.page.limit = limit;
        self
    }
}
