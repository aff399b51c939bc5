use schemars::JsonSchema;
use serde::Serialize;

use crate::{location::Location, mosque::Mosque, WithId};

/// Which resolution path produced a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SearchKind {
    Zip,
    Mosque,
}

/// The assembled outcome of one search resolution. Built fresh per request,
/// never persisted.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub kind: SearchKind,
    pub location: WithId<Location>,
    /// All mosques of the resolved location, ordered ascending by the raw
    /// first-prayer-time label.
    pub mosques: Vec<WithId<Mosque>>,
    /// The mosque a name query matched. Always a member of `mosques`, and
    /// only present for [`SearchKind::Mosque`].
    pub matched_mosque: Option<WithId<Mosque>>,
}
