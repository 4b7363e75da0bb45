//! Binary for the echo bot. Token comes from TOKEN (environment or `.env`).

use anyhow::Result;
use clap::Parser;
use dbot_telegram::TelegramConfig;

#[derive(Parser)]
#[command(name = "echo-bot")]
#[command(about = "Telegram bot: /start, /help, and echo for everything else", long_about = None)]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();

    echo_bot::run_bot(TelegramConfig::from_env()).await
}
