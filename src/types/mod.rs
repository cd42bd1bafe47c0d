pub mod itinerary;
pub mod response;

pub use itinerary::{ItinerarySummary, PriceRange};
pub use response::{deserialize_summary, extract_message_content};
