//! Command-line interface.
//!
//! Flag driven: `-u/-p/-n` add a record, `--clean` empties the store, and no
//! flags at all opens the interactive menu.

pub mod add;
pub mod clean;
pub mod completions;
pub mod output;
pub mod pick;

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::core::config::Config;
use crate::core::store::Store;
use crate::error::Result;

/// credmenu - Simple credential manager for CTFs.
#[derive(Parser, Debug)]
#[command(
    name = "credmenu",
    about = "Simple credential manager for CTFs",
    long_about = "Store short credentials in a flat file and pick them from a rofi menu.\n\n\
                  In the menu: Enter or Ctrl+c copies the password, Ctrl+C copies the \
                  username, Ctrl+D deletes the entry.",
    version,
    group(ArgGroup::new("credential").args(["user", "password"]).multiple(true))
)]
pub struct Cli {
    /// New username to store
    #[arg(short = 'u', long = "user", value_name = "NAME")]
    pub user: Option<String>,

    /// New password to store
    #[arg(short = 'p', long = "password", value_name = "SECRET")]
    pub password: Option<String>,

    /// Note about the credential
    #[arg(short = 'n', long = "note", value_name = "NOTE", requires = "credential")]
    pub note: Option<String>,

    /// Clear the credentials file
    #[arg(long, conflicts_with_all = ["user", "password", "note"])]
    pub clean: bool,

    /// Credentials file (default: ~/.cred)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Run whatever the flags ask for.
pub fn execute(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        return completions::execute(shell);
    }

    let mut config = Config::load()?;
    if let Some(file) = cli.file {
        config.store.path = Some(file);
    }
    let store = Store::from_config(&config)?;

    if cli.clean {
        clean::execute(&store)
    } else if cli.user.is_some() || cli.password.is_some() {
        add::execute(&config, &store, cli.user, cli.password, cli.note)
    } else {
        pick::execute(&config, &store)
    }
}
