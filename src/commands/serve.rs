use anyhow::{Context, Result};
use crate::cli::ServeArgs;
use crate::config::Config;
use crate::server;

pub async fn handle_serve_command(mut config: Config, args: &ServeArgs) -> Result<()> {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(lexicon) = &args.lexicon {
        config.server.lexicon = Some(lexicon.clone());
    }
    config.validate()?;

    server::serve(&config.server)
        .await
        .context("Model service failed")?;

    Ok(())
}
