use crate::ItineraryFetcher;
use clap::{Arg, ArgAction, Command};
use std::env;
use tracing::{error, info};

/// CLI entry point for the trip-scout tool
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-scout")
        .version("0.1.0")
        .about("Fetch an LLM-generated travel summary for a destination")
        .arg(
            Arg::new("destination")
                .help("The destination to summarize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The Groq model to use")
                .default_value("llama-3.3-70b-versatile"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Groq API key (or set GROQ_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("API base URL (or set GROQ_BASE_URL env var)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .default_value("120"),
        )
        .arg(
            Arg::new("temperature")
                .long("temperature")
                .value_name("VALUE")
                .help("Sampling temperature")
                .default_value("0.6"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Validate cardinality and price-tier rules locally"),
        )
        .get_matches();

    // Get API key from argument or environment
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("GROQ_API_KEY").ok())
        .ok_or("Groq API key is required. Set GROQ_API_KEY environment variable or use --api-key")?;

    // Resolve base URL from CLI or environment
    let base_url = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("GROQ_BASE_URL").ok())
        .unwrap_or_else(|| "https://api.groq.com/openai/v1".to_string());

    let timeout_seconds: u64 = matches.get_one::<String>("timeout").unwrap().parse()?;
    let temperature: f64 = matches.get_one::<String>("temperature").unwrap().parse()?;

    let fetcher = ItineraryFetcher::new(api_key)
        .with_model(matches.get_one::<String>("model").unwrap().as_str())
        .with_timeout(std::time::Duration::from_secs(timeout_seconds))
        .with_temperature(temperature)
        .with_strict_validation(matches.get_flag("strict"))
        .with_base_url(base_url.clone());

    let destination = matches.get_one::<String>("destination").unwrap();
    info!("Fetching itinerary for: {}", destination);
    info!("Using model: {}", fetcher.model());
    info!("Base URL: {}", base_url);

    match fetcher.get_itinerary(destination).await {
        Ok(summary) => {
            println!("\n{} ({})", summary.destination, summary.price_range);
            println!("\nIdeal visit times:");
            for window in &summary.ideal_visit_times {
                println!("  - {}", window);
            }
            println!("\nTop attractions:");
            for attraction in &summary.top_attractions {
                println!("  - {}", attraction);
            }
            println!("\n{}", serde_json::to_string_pretty(&summary)?);
            info!("Itinerary fetch completed successfully");
        }
        Err(e) => {
            error!("Itinerary fetch failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
