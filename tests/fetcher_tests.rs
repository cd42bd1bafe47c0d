use mockito::{Matcher, Server};
use serde_json::json;
use trip_scout::{ItineraryFetcher, PriceRange, ScoutError};

fn completion_envelope(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

fn fetcher_for(server: &Server) -> ItineraryFetcher {
    ItineraryFetcher::new("test-key").with_base_url(server.url())
}

const PARIS_SUMMARY: &str = r#"{"destination":"Paris","price_range":"mid-range","ideal_visit_times":["spring","fall"],"top_attractions":["Eiffel Tower","Louvre","Montmartre","Notre-Dame","Seine River Cruise"]}"#;

#[tokio::test]
async fn missing_credential_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let fetcher = ItineraryFetcher::new("").with_base_url(server.url());
    let err = fetcher.get_itinerary("Paris").await.unwrap_err();

    assert!(matches!(err, ScoutError::Config(_)), "{:?}", err);
    assert!(err.to_string().contains("GROQ_API_KEY"));
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_destination_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let err = fetcher_for(&server)
        .get_itinerary("   ")
        .await
        .unwrap_err();

    assert!(matches!(err, ScoutError::Config(_)), "{:?}", err);
    mock.assert_async().await;
}

#[tokio::test]
async fn happy_path_returns_typed_summary() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "model": "llama-3.3-70b-versatile",
            "temperature": 0.6
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_envelope(PARIS_SUMMARY))
        .create_async()
        .await;

    let summary = fetcher_for(&server).get_itinerary("Paris").await.unwrap();

    assert_eq!(summary.destination, "Paris");
    assert_eq!(summary.price_range, PriceRange::MidRange);
    assert_eq!(summary.ideal_visit_times, vec!["spring", "fall"]);
    assert_eq!(
        summary.top_attractions,
        vec![
            "Eiffel Tower",
            "Louvre",
            "Montmartre",
            "Notre-Dame",
            "Seine River Cruise"
        ]
    );
    assert!(summary.extra.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_json_error_carries_raw_text() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_envelope("not json at all"))
        .create_async()
        .await;

    let err = fetcher_for(&server).get_itinerary("Paris").await.unwrap_err();

    assert!(matches!(err, ScoutError::InvalidJson { .. }), "{:?}", err);
    assert!(err.to_string().contains("not json at all"));
}

#[tokio::test]
async fn missing_keys_error_lists_present_keys() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_envelope(
            r#"{"destination":"Rome","price_range":"luxury"}"#,
        ))
        .create_async()
        .await;

    let err = fetcher_for(&server).get_itinerary("Rome").await.unwrap_err();

    match &err {
        ScoutError::MissingKeys { present } => {
            assert_eq!(present, &vec!["destination".to_string(), "price_range".to_string()]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("destination"));
    assert!(err.to_string().contains("price_range"));
}

#[tokio::test]
async fn extra_keys_pass_through_unchanged() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_envelope(
            r#"{"destination":"Paris","price_range":"mid-range","ideal_visit_times":["spring","fall"],"top_attractions":["Eiffel Tower","Louvre","Montmartre","Notre-Dame","Seine River Cruise"],"notes":"x"}"#,
        ))
        .create_async()
        .await;

    let summary = fetcher_for(&server).get_itinerary("Paris").await.unwrap();

    assert_eq!(summary.extra.get("notes"), Some(&json!("x")));

    let serialized = serde_json::to_value(&summary).unwrap();
    assert_eq!(serialized["notes"], "x");
}

#[tokio::test]
async fn identical_responses_produce_equal_results() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_envelope(PARIS_SUMMARY))
        .expect(2)
        .create_async()
        .await;

    let fetcher = fetcher_for(&server);
    let first = fetcher.get_itinerary("Paris").await.unwrap();
    let second = fetcher.get_itinerary("Paris").await.unwrap();

    assert_eq!(first, second);
    mock.assert_async().await;
}

#[tokio::test]
async fn strict_validation_rejects_rule_breaking_payload() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_envelope(
            r#"{"destination":"Rome","price_range":"luxury","ideal_visit_times":["spring"],"top_attractions":["Colosseum","Forum","Pantheon","Trevi","Vatican"]}"#,
        ))
        .expect(2)
        .create_async()
        .await;

    // Default trusts the model, so a short visit-times list still parses.
    let lenient = fetcher_for(&server);
    lenient.get_itinerary("Rome").await.unwrap();

    let strict = fetcher_for(&server).with_strict_validation(true);
    let err = strict.get_itinerary("Rome").await.unwrap_err();

    assert!(matches!(err, ScoutError::Validation(_)), "{:?}", err);
    assert!(err.to_string().contains("ideal_visit_times"));
}

#[tokio::test]
async fn provider_error_surfaces_api_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": {"message": "model not found"}}).to_string())
        .create_async()
        .await;

    let err = fetcher_for(&server).get_itinerary("Paris").await.unwrap_err();

    assert!(matches!(err, ScoutError::Api(_)), "{:?}", err);
    assert!(err.to_string().contains("model not found"));
}

#[tokio::test]
async fn rate_limit_exhausts_retries() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_header("retry-after", "0")
        .with_body("{}")
        .expect(4)
        .create_async()
        .await;

    let err = fetcher_for(&server).get_itinerary("Paris").await.unwrap_err();

    assert!(matches!(err, ScoutError::RateLimit { retry_after: 1 }), "{:?}", err);
    assert!(err.is_retryable());
    mock.assert_async().await;
}

#[test]
fn error_codes_and_payloads() {
    let error = ScoutError::Config("missing key".to_string());
    assert_eq!(error.error_code(), "CONFIG_ERROR");
    assert!(!error.is_retryable());

    let payload = error.to_error_payload();
    assert_eq!(payload["error"]["code"], "CONFIG_ERROR");
    assert_eq!(payload["error"]["retryable"], false);
    assert!(payload["error"]["message"]
        .as_str()
        .unwrap()
        .contains("missing key"));
}
