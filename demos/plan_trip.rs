use trip_scout::ItineraryFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::try_init().ok();

    let destination = std::env::args().nth(1).unwrap_or_else(|| "Paris".to_string());

    let fetcher = ItineraryFetcher::from_env()?;

    println!("=== Trip Scout ===\n");
    println!("Fetching travel summary for {destination}...\n");

    let summary = fetcher.get_itinerary(&destination).await?;

    println!("{} ({})", summary.destination, summary.price_range);

    println!("\nIdeal visit times:");
    for window in &summary.ideal_visit_times {
        println!("  - {}", window);
    }

    println!("\nTop attractions:");
    for attraction in &summary.top_attractions {
        println!("  - {}", attraction);
    }

    if !summary.extra.is_empty() {
        println!("\nExtra fields the model added:");
        for (key, value) in &summary.extra {
            println!("  {}: {}", key, value);
        }
    }

    println!(
        "\nStructured JSON:\n{}",
        serde_json::to_string_pretty(&summary)?
    );

    Ok(())
}
