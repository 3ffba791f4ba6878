//! forminfo-tui - read-only dialog showing the submitted content of a form
//!
//! Asks the host application's form info plugin for the content of one
//! procedure and shows it as a two-column info dialog in the terminal.

mod cli;
mod config;
mod error;
mod host;
mod platform;
mod plugin;
mod presenter;
mod renderer;
mod state;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::FormInfoConfig;
use host::HostClient;
use plugin::{FormInfoPlugin, Outcome};
use presenter::TerminalPresenter;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forminfo_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FormInfoConfig::load_from(path)?,
        None => FormInfoConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable configuration: {e}");
            FormInfoConfig::default()
        }),
    };

    let (dialog_width, dialog_height) = config.dialog_size();
    let host = HostClient::new(config.host_address(cli.address.as_deref())).await;
    tracing::debug!(
        address = host.address(),
        dialog_width,
        dialog_height,
        "Loading form content for procedure {}",
        cli.procedure_id
    );
    let plugin = Arc::new(
        FormInfoPlugin::new(host, TerminalPresenter::new(dialog_width, dialog_height))
            .with_plugin_name(config.plugin_name(cli.plugin.as_deref()))
            .with_main_form_resolution(cli.main_form),
    );

    match plugin.show_form_content_info(cli.procedure_id).await? {
        Ok(Outcome::FetchFailed) => std::process::exit(2),
        Ok(_) => Ok(()),
        Err(err) => {
            eprintln!("Error: {err:?}");
            std::process::exit(1);
        }
    }
}
