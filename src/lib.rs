pub mod cli;
pub mod clients;
pub mod config;
pub mod domain;
pub mod models;
pub mod services;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, Commands};
pub use config::Config;
use services::SessionHandle;

/// Loads the configuration named on the command line, or searches the default
/// locations, and applies command-line overrides.
///
/// `init-config` gets the defaults, since its target file usually does not
/// exist yet.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if matches!(cli.command, Some(Commands::InitConfig)) {
        return Ok(Config::default());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    if let Some(fixture) = &cli.fixture {
        config.generation.fixture_path = Some(fixture.clone());
    }

    Ok(config)
}

pub fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    if let Some(Commands::InitConfig) = &cli.command {
        let path = cli.config.unwrap_or_else(Config::default_config_path);
        return cli::cmd_init_config(&path);
    }

    config.validate()?;

    let gateway = clients::build_gateway(&config.generation)
        .context("Failed to set up the generation gateway")?;
    let handle = SessionHandle::new(gateway, config.general.event_bus_buffer_size);

    match cli.command {
        None | Some(Commands::Browse) => cli::cmd_browse(&handle).await,
        Some(Commands::Show { book, author }) => cli::cmd_show(&handle, book, author).await,
        Some(Commands::InitConfig) => Ok(()),
    }
}
