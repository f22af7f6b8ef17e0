use crate::config::Config;
use crate::cli::ConfigCommands;
use crate::utils::{self, OutputStyle};
use anyhow::Result;
use std::path::Path;

pub fn handle_config_command(
    config: Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(ConfigCommands::Reset { yes }) => handle_reset_command(config_path, yes),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    OutputStyle::print_header("⚙️  Sentiment Predictor Configuration");

    println!("Server:");
    OutputStyle::print_field("Host", &config.server.host);
    OutputStyle::print_field("Port", &config.server.port.to_string());
    match &config.server.lexicon {
        Some(path) => OutputStyle::print_field("Lexicon", &path.display().to_string()),
        None => OutputStyle::print_field("Lexicon", &OutputStyle::muted("built-in").to_string()),
    }

    println!("Gateway:");
    OutputStyle::print_field("Host", &config.gateway.host);
    OutputStyle::print_field("Port", &config.gateway.port.to_string());
    OutputStyle::print_field("Model URL", &config.gateway.model_url);
    OutputStyle::print_field("Origins", &config.gateway.allowed_origins.join(", "));

    println!("Client:");
    match &config.client.endpoint {
        Some(endpoint) => OutputStyle::print_field("Endpoint", endpoint),
        None => OutputStyle::print_field("Endpoint", &OutputStyle::muted("local").to_string()),
    }
    OutputStyle::print_field("Color", &config.client.color.to_string());

    Ok(())
}

fn handle_config_help(config_path: &Path) -> Result<()> {
    OutputStyle::print_header("⚙️  Configuration Management");
    println!("Available configuration commands:");
    println!("  sentiment-predictor config show    - Show current configuration");
    println!("  sentiment-predictor config path    - Print the configuration file location");
    println!("  sentiment-predictor config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", config_path.display());
    Ok(())
}

fn handle_reset_command(config_path: &Path, yes: bool) -> Result<()> {
    if yes || utils::prompt_yes_no("Are you sure you want to reset configuration to defaults? This will overwrite your current settings.")? {
        Config::default().save_to(config_path)?;
        utils::print_success("Configuration reset to defaults!");
    } else {
        println!("{}", OutputStyle::muted("Reset cancelled."));
    }
    Ok(())
}
