/// System instruction pinning the model to bare JSON output.
pub fn itinerary_system_prompt() -> &'static str {
    "You output strict JSON only."
}

/// Build the user prompt embedding the destination and the expected shape.
///
/// The cardinality rules are guidance to the model; local enforcement is
/// opt-in via strict validation on the fetcher.
pub fn build_itinerary_prompt(destination: &str) -> String {
    format!(
        r#"Return ONLY valid JSON (no markdown, no backticks) for a travel summary of {destination}.
Must match this schema exactly:

{{
  "destination": "{destination}",
  "price_range": "budget|mid-range|luxury",
  "ideal_visit_times": ["..."],
  "top_attractions": ["..."]
}}

Rules:
- ideal_visit_times: 2-4 items
- top_attractions: 5-8 items"#
    )
}
