use scanner_ta::{Config, ScannerClient, TechnicalAnalysis};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scanner_ta=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    // Usage: scanner-ta [SYMBOL] [INTERVAL]
    let mut args = std::env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| config.symbol.clone());
    let interval = args.next().unwrap_or_else(|| config.interval.clone());

    let client = ScannerClient::new(&config)?;
    info!("Scanning {} on {} via {}", symbol, interval, client.scan_url());

    let ta = TechnicalAnalysis::new(client);
    let report = ta.get(&symbol, &interval).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
