use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{location::Location, ExampleData};

/// A single mosque listing.
///
/// The prayer-time fields are free-text labels exactly as entered by an
/// administrator (e.g. "12:15 PM"). They are never parsed as times; ordered
/// listings sort them as plain strings.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mosque {
    pub location_id: Id<Location>,
    pub name: String,
    pub first_prayer_time: String,
    pub second_prayer_time: String,
    pub address: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl HasId for Mosque {
    type IdType = String;
}

impl ExampleData for Mosque {
    fn example_data() -> Self {
        Mosque {
            location_id: Id::new("d5f2c1aa-0000-0000-0000-000000000000".to_owned()),
            name: "Masjid Al-Noor".to_owned(),
            first_prayer_time: "12:15 PM".to_owned(),
            second_prayer_time: "1:30 PM".to_owned(),
            address: "123 Main St".to_owned(),
            created_at: None,
        }
    }
}
