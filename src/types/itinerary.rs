use std::fmt;
use std::sync::OnceLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schemas::{CompletionSchema, SchemaHandle};

/// Price tier reported for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PriceRange {
    Budget,
    MidRange,
    Luxury,
}

impl PriceRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Budget => "budget",
            PriceRange::MidRange => "mid-range",
            PriceRange::Luxury => "luxury",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured travel summary returned by the itinerary fetcher.
///
/// Unknown top-level keys the model adds are preserved in `extra` and
/// round-trip through serialization unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ItinerarySummary {
    /// Destination name, expected to echo the request input
    pub destination: String,
    /// One of `budget`, `mid-range`, `luxury`
    pub price_range: PriceRange,
    /// Best windows to visit, in preference order
    #[schemars(length(min = 2, max = 4))]
    pub ideal_visit_times: Vec<String>,
    /// Must-see attractions, in preference order
    #[schemars(length(min = 5, max = 8))]
    pub top_attractions: Vec<String>,
    #[serde(flatten)]
    #[schemars(skip)]
    pub extra: Map<String, Value>,
}

impl CompletionSchema for ItinerarySummary {
    fn schema() -> &'static SchemaHandle {
        static HANDLE: OnceLock<SchemaHandle> = OnceLock::new();
        HANDLE.get_or_init(|| {
            SchemaHandle::from_root_schema(
                "ItinerarySummary",
                schemars::schema_for!(ItinerarySummary),
            )
        })
    }
}
