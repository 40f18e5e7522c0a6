use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use weather_minmax::cli::{run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    run(cli).await.context("weather aggregation failed")?;
    Ok(())
}
