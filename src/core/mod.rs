pub mod fetcher;
pub mod prompt;

pub use fetcher::{ItineraryFetcher, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use prompt::{build_itinerary_prompt, itinerary_system_prompt};
