use log::{error, info};
use market_data::{fetch_with_config, AppConfig, HistoryRequest, PriceSeries};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Load .env and layered configuration
    dotenv::dotenv().ok();

    let config: AppConfig = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // 2. Initialize Logger (RUST_LOG still takes precedence)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();

    let request: HistoryRequest = match config.default_request() {
        Ok(r) => r,
        Err(e) => {
            error!("Invalid request defaults: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        ">>> Fetching {} days of {} priced in {} <<<",
        request.days, request.coin_id, request.currency
    );

    // 3. Single fetch, no retry
    let series: PriceSeries = match fetch_with_config(&config, &request).await {
        Ok(s) => s,
        Err(e) => {
            error!("Fetch failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // 4. Summary
    info!("Received {} observations", series.len());
    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        info!("First: {} @ {}", first.timestamp.to_rfc3339(), first.price);
        info!("Last:  {} @ {}", last.timestamp.to_rfc3339(), last.price);
    }

    ExitCode::SUCCESS
}
