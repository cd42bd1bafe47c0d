//! trip-scout: a lightweight, type-safe client for LLM-generated travel itineraries
//!
//! This library composes a prompt for a travel destination, calls an
//! OpenAI-compatible chat completion endpoint, and validates the reply
//! against a fixed itinerary contract before returning a typed summary.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_scout::ItineraryFetcher;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = ItineraryFetcher::from_env()?;
//!
//!     let summary = fetcher.get_itinerary("Paris").await?;
//!     println!("{} is {}", summary.destination, summary.price_range);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod schemas;
pub(crate) mod services;
pub mod types;

pub use crate::core::{
    build_itinerary_prompt, itinerary_system_prompt, ItineraryFetcher, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};
pub use crate::error::{Result, ScoutError};
pub use crate::schemas::{CompletionSchema, SchemaHandle};
pub use crate::types::itinerary::{ItinerarySummary, PriceRange};
pub use crate::types::response::{deserialize_summary, extract_message_content};

#[cfg(feature = "cli")]
pub mod cli;
