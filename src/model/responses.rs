use crate::presentation::serialization::null_as_empty_vec;
use serde::{Deserialize, Serialize};

/// Envelope wrapping the items returned by list endpoints, `{"objects": [...]}`
///
/// A missing or `null` `objects` field decodes as an empty page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    /// Items of the page
    #[serde(
        default,
        deserialize_with = "null_as_empty_vec"
    )]
    pub objects: Vec<T>,
}

impl<T> ListEnvelope<T> {
    /// Unwraps the items
    pub fn into_inner(self) -> Vec<T> {
        self.objects
    }
}
