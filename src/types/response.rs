use serde_json::Value;

use crate::{
    error::{Result, ScoutError},
    schemas::CompletionSchema,
};

/// Top-level keys every itinerary payload must carry.
pub const REQUIRED_KEYS: [&str; 4] = [
    "destination",
    "price_range",
    "ideal_visit_times",
    "top_attractions",
];

/// Pull the first choice's message text out of a completion envelope.
pub fn extract_message_content(response: &Value) -> Result<String> {
    let content = response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|value| value.as_str())
        .ok_or_else(|| {
            ScoutError::Api("completion response contained no message content".to_string())
        })?;

    Ok(content.trim().to_string())
}

/// Parse completion text as JSON, keeping the raw text on failure.
pub fn parse_summary_json(content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|err| ScoutError::InvalidJson {
        diagnostic: err.to_string(),
        raw: content.to_string(),
    })
}

/// Check that all required top-level keys are present.
pub fn ensure_required_keys(payload: &Value) -> Result<()> {
    let object = payload.as_object().ok_or_else(|| ScoutError::MissingKeys {
        present: Vec::new(),
    })?;

    let complete = REQUIRED_KEYS.iter().all(|key| object.contains_key(*key));
    if !complete {
        return Err(ScoutError::MissingKeys {
            present: object.keys().cloned().collect(),
        });
    }

    Ok(())
}

/// Deserialize a payload into its schema type with path-annotated errors.
pub fn deserialize_summary<T>(payload: &Value) -> Result<T>
where
    T: CompletionSchema,
{
    let schema = T::schema();
    let raw = payload.to_string();
    let mut deserializer = serde_json::Deserializer::from_str(&raw);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        };
        ScoutError::Validation(format!(
            "failed to deserialize `{}` at {}: {}",
            schema.schema_name(),
            location,
            err
        ))
    })?;

    Ok(value)
}
