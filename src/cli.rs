//! Command line arguments

use clap::Parser;
use std::path::PathBuf;

/// Show the submitted content of a form in a read-only dialog
#[derive(Debug, Parser)]
#[command(name = "forminfo-tui", version, about)]
pub struct Cli {
    /// Procedure id of the form to show
    pub procedure_id: i64,

    /// Plugin host address
    #[arg(long, env = "FORMINFO_HOST_ADDRESS")]
    pub address: Option<String>,

    /// Name under which the host registered the plugin
    #[arg(long)]
    pub plugin: Option<String>,

    /// Show the main form of the given subform procedure
    #[arg(long)]
    pub main_form: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}
