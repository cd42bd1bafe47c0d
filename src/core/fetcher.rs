use crate::{
    core::prompt::{build_itinerary_prompt, itinerary_system_prompt},
    error::{Result, ScoutError},
    schemas::{validation::validate_summary_payload, CompletionSchema},
    services::{ChatCompletionRequest, CompletionClient},
    types::{
        itinerary::ItinerarySummary,
        response::{
            deserialize_summary, ensure_required_keys, extract_message_content, parse_summary_json,
        },
    },
};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f64 = 0.6;

/// Fetches a validated travel summary for a destination from the
/// completion service.
///
/// Holds no mutable state; a single instance can be shared across tasks
/// and every call is independent.
#[derive(Debug)]
pub struct ItineraryFetcher {
    client: CompletionClient,
    model: String,
    temperature: f64,
    timeout: Duration,
    strict: bool,
}

impl ItineraryFetcher {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: CompletionClient::new(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(120),
            strict: false,
        }
    }

    /// Build a fetcher from `GROQ_API_KEY`, honoring `GROQ_BASE_URL` when set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
            ScoutError::Config(
                "GROQ_API_KEY environment variable must be set before creating a fetcher. Put it in your .env file.".to_string(),
            )
        })?;
        let mut fetcher = Self::new(api_key);
        if let Ok(base_url) = std::env::var("GROQ_BASE_URL") {
            fetcher.client.set_base_url(base_url);
        }
        Ok(fetcher)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client.set_base_url(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Enforce the cardinality and price-tier rules locally instead of
    /// trusting the model to follow the prompt.
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fetch a travel summary for `destination`.
    ///
    /// Fails fast with [`ScoutError::Config`] before any network access
    /// when the credential is blank or the destination is empty. Transport
    /// and provider failures surface unwrapped from the completion client.
    pub async fn get_itinerary(&self, destination: &str) -> Result<ItinerarySummary> {
        if !self.client.has_credential() {
            return Err(ScoutError::Config(
                "Missing GROQ_API_KEY. Put it in your .env file.".to_string(),
            ));
        }

        let destination = destination.trim();
        if destination.is_empty() {
            return Err(ScoutError::Config(
                "destination must be a non-empty string".to_string(),
            ));
        }

        let messages = vec![
            serde_json::json!({
                "role": "system",
                "content": itinerary_system_prompt()
            }),
            serde_json::json!({
                "role": "user",
                "content": build_itinerary_prompt(destination)
            }),
        ];

        let body = ChatCompletionRequest::new(&self.model, messages)
            .with_temperature(self.temperature)
            .into_value();

        debug!(
            target: "trip_scout::fetcher",
            model = %self.model,
            destination,
            "requesting itinerary"
        );

        let response = self.client.chat_completion(&body, self.timeout).await?;
        let content = extract_message_content(&response)?;
        let payload = parse_summary_json(&content)?;
        ensure_required_keys(&payload)?;

        if self.strict {
            validate_summary_payload(ItinerarySummary::schema(), &payload)?;
        }

        deserialize_summary::<ItinerarySummary>(&payload)
    }
}
