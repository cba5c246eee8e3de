//! credmenu - Simple credential manager for CTFs.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use credmenu::cli::output;
use credmenu::cli::{execute, Cli};
use credmenu::core::constants::ENV_LOG;
use credmenu::error::{DependencyError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("credmenu=debug")
        } else {
            EnvFilter::new("credmenu=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Dependency(DependencyError::Missing { role: "chooser", .. }) => {
                Some("install rofi or set CREDMENU_CHOOSER")
            }
            Error::Dependency(DependencyError::Missing { role: "notifier", .. }) => {
                Some("install libnotify (notify-send) or set CREDMENU_NOTIFIER")
            }
            Error::Dependency(DependencyError::Missing { .. }) => {
                Some("install wl-clipboard or xclip, or set CREDMENU_CLIPBOARD")
            }
            Error::Store(StoreError::Malformed { .. }) => {
                Some("fix the file by hand or run: credmenu --clean")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
