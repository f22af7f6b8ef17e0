use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use anyhow::Result;
use crate::config::Config;
use crate::commands::{analyze, configure, gateway, serve};

#[derive(Parser)]
#[command(name = "sentiment-predictor")]
#[command(about = "Classify the sentiment of short texts over HTTP")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub async fn execute(self, config: Config, config_path: PathBuf) -> Result<()> {
        match self {
            Commands::Serve(args) => {
                serve::handle_serve_command(config, &args).await?;
            }
            Commands::Gateway(args) => {
                gateway::handle_gateway_command(config, &args).await?;
            }
            Commands::Analyze(args) => {
                analyze::handle_analyze_command(config, &args).await?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, &config_path, args.command)?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the model service (POST /predict)
    Serve(ServeArgs),

    /// Run the CORS gateway that proxies POST /api/predict to the model service
    Gateway(GatewayArgs),

    /// Classify a text or a .txt file
    Analyze(AnalyzeArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, help = "Address to bind (overrides server.host)")]
    pub host: Option<String>,

    #[arg(short, long, help = "Port to bind (overrides server.port)")]
    pub port: Option<u16>,

    #[arg(long, value_name = "FILE", help = "Lexicon TOML replacing the built-in one")]
    pub lexicon: Option<PathBuf>,
}

#[derive(Args)]
pub struct GatewayArgs {
    #[arg(long, help = "Address to bind (overrides gateway.host)")]
    pub host: Option<String>,

    #[arg(short, long, help = "Port to bind (overrides gateway.port)")]
    pub port: Option<u16>,

    #[arg(short, long, value_name = "URL", help = "Base URL of the model service")]
    pub model_url: Option<String>,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to classify
    pub text: Option<String>,

    #[arg(short, long, value_name = "FILE", help = "Read the text from a .txt file (max 1MB)")]
    pub file: Option<PathBuf>,

    #[arg(short, long, value_name = "URL", conflicts_with = "local", help = "Predict route to call instead of classifying locally")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Classify in-process even if client.endpoint is configured")]
    pub local: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset {
        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
