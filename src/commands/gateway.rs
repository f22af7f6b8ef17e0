use anyhow::{Context, Result};
use crate::cli::GatewayArgs;
use crate::config::Config;
use crate::server::gateway;

pub async fn handle_gateway_command(mut config: Config, args: &GatewayArgs) -> Result<()> {
    if let Some(host) = &args.host {
        config.gateway.host = host.clone();
    }
    if let Some(port) = args.port {
        config.gateway.port = port;
    }
    if let Some(model_url) = &args.model_url {
        config.gateway.model_url = model_url.clone();
    }
    config.validate()?;

    gateway::serve(&config.gateway)
        .await
        .context("Gateway failed")?;

    Ok(())
}
