mod commands;

use anyhow::Context;
use clap::Parser;

use storefront::cli::{Cli, Command};
use storefront::config::{Config, ConfigStore};
use storefront::logging::{init_cli_tracing, init_tui_tracing};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if matches!(cli.command, Command::Browse { .. }) {
        init_tui_tracing();
    } else {
        init_cli_tracing();
    }

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    let store = ConfigStore::new(config);
    store.update(|config| cli.apply_overrides(config));
    store.get().validate().context("invalid settings")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    commands::run(cli.command, &store, &runtime)
}
