//! Homework bot: poll the review API every RETRY_PERIOD seconds and push status
//! changes to a Telegram chat.
//!
//! Usage: homework-bot
//!
//! Credentials come from the environment or a `.env` file:
//! PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID.

mod config;
mod logging;

use anyhow::{Context, Result};
use clients_practicum::{PracticumClient, PracticumClientConfig};
use clients_telegrambot::TelegramBot;
use homework::{HomeworkWatcher, WatcherConfig};
use tracing::{error, info};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(fatal = true, "{}", e);
            eprintln!("homework-bot: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded configuration: endpoint={}, retry_period={:?}, request_timeout={:?}",
        config.endpoint, config.retry_period, config.request_timeout
    );

    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let practicum = PracticumClient::new(
        client.clone(),
        PracticumClientConfig {
            token: config.practicum_token,
            endpoint: config.endpoint,
        },
    );
    let telegram = TelegramBot::new(client, config.telegram_token, config.telegram_chat_id);

    let watcher_config =
        WatcherConfig::looking_back(config.retry_period, utils::unix_timestamp_secs());
    let mut watcher = HomeworkWatcher::new(watcher_config, practicum, telegram);
    watcher.run().await;

    Ok(())
}
