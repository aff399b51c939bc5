use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::ExampleData;

/// A postal-code area that owns zero or more mosques.
///
/// The zip code is stored as text even though a five-digit numeric format is
/// expected; the store enforces its uniqueness. `created_at` is assigned by
/// the store, so freshly built records leave it unset.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub zip_code: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl HasId for Location {
    type IdType = String;
}

impl ExampleData for Location {
    fn example_data() -> Self {
        Location {
            zip_code: "10001".to_owned(),
            city: "New York".to_owned(),
            state: "NY".to_owned(),
            created_at: None,
        }
    }
}
