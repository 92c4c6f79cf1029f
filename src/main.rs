mod analyzer;
mod config;
mod fallback;
mod fetcher;
mod model;
mod normalizer;
mod parser;
mod pipeline;
mod renderer;
mod utils;

use config::{load_config, DEFAULT_CONFIG_PATH};
use fetcher::WorldBankClient;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config = match load_config(DEFAULT_CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Countries: {} | Year: {}",
        config.countries_param(),
        config.year
    );

    let client = match WorldBankClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match pipeline::run(&client, &config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
