use anyhow::{Context, Result};
use crate::cli::AnalyzeArgs;
use crate::client::{LocalClient, RemoteClient, input};
use crate::config::Config;
use crate::core::SentimentClient;
use crate::server;
use crate::utils::OutputStyle;

pub async fn handle_analyze_command(mut config: Config, args: &AnalyzeArgs) -> Result<()> {
    if !config.client.color {
        colored::control::set_override(false);
    }

    config.client.endpoint = select_endpoint(args, config.client.endpoint.take());
    config.validate()?;

    let text = input::resolve_input(args.text.as_deref(), args.file.as_deref())?;

    let client: Box<dyn SentimentClient> = match &config.client.endpoint {
        Some(endpoint) => Box::new(RemoteClient::new(endpoint.clone())?),
        None => Box::new(LocalClient::new(server::build_classifier(&config.server)?)),
    };

    let prediction = client
        .predict(&text)
        .await
        .context("Failed to analyze text")?;

    OutputStyle::print_prediction(&prediction);
    Ok(())
}

/// `--local` wins, then `--endpoint`, then `client.endpoint` from the config
fn select_endpoint(args: &AnalyzeArgs, configured: Option<String>) -> Option<String> {
    if args.local {
        None
    } else {
        args.endpoint.clone().or(configured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIGURED: &str = "http://127.0.0.1:3001/api/predict";
    const FLAG: &str = "http://127.0.0.1:8000/predict";

    fn args(endpoint: Option<&str>, local: bool) -> AnalyzeArgs {
        AnalyzeArgs {
            text: Some("hello".to_string()),
            file: None,
            endpoint: endpoint.map(str::to_string),
            local,
        }
    }

    #[test]
    fn test_local_flag_ignores_configured_endpoint() {
        let selected = select_endpoint(&args(None, true), Some(CONFIGURED.to_string()));
        assert!(selected.is_none());
    }

    #[test]
    fn test_endpoint_flag_overrides_config() {
        let selected = select_endpoint(&args(Some(FLAG), false), Some(CONFIGURED.to_string()));
        assert_eq!(selected.as_deref(), Some(FLAG));
    }

    #[test]
    fn test_configured_endpoint_used_without_flags() {
        let selected = select_endpoint(&args(None, false), Some(CONFIGURED.to_string()));
        assert_eq!(selected.as_deref(), Some(CONFIGURED));

        assert!(select_endpoint(&args(None, false), None).is_none());
    }
}
