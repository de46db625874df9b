use crate::cli::Cli;
use crate::ecs::EcsClient;
use crate::{locate, output, FindConfig, Result};
use std::io;
use tracing::info;

pub async fn handle(cli: &Cli) -> Result<()> {
    let config = FindConfig::from_cli(cli)?;
    info!("Searching for services matching {:?}", config.query);

    let client = EcsClient::from_env(&config).await?;
    let hosts = locate(&client, &config).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_hosts(&mut out, &hosts)?;

    Ok(())
}
