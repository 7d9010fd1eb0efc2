use std::io::Write;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use etrade::api::Environment;
use etrade::cli::Cli;
use etrade::config::Config;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only response bodies
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("etrade=info".parse()?))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if cli.production {
        config = config.with_environment(Environment::Production);
    }
    tracing::info!(environment = %config.environment, "Using E*TRADE API");

    let client = config.build_client()?;
    let output = cli.command.execute(&client)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
