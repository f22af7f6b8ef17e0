use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sentiment_predictor::cli::Cli;
use sentiment_predictor::config::Config;
use sentiment_predictor::utils::{AppError, report_error};

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    // A missing config file is created with defaults on first load
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);
    let config = Config::load_custom(&config_path)?;

    cli.command.execute(config, config_path).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<AppError>() {
            Some(app_err) => report_error(app_err),
            None => eprintln!("❌ {:#}", err),
        }
        std::process::exit(1);
    }
}
