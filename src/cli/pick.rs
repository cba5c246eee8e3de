//! Interactive mode (no flags).
//!
//! Wires the real chooser, clipboard and notifier into the dispatcher.

use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::deps;
use crate::core::desktop::{CommandClipboard, CommandNotifier};
use crate::core::dispatch::{Completion, Dispatcher};
use crate::core::selector::CommandChooser;
use crate::core::store::Store;
use crate::error::Result;

/// Check dependencies, then run the interactive cycle.
pub fn execute(config: &Config, store: &Store) -> Result<()> {
    deps::require("chooser", &config.selector.command)?;
    deps::require("notifier", &config.notify.command)?;
    let mut clipboard = CommandClipboard::from_config(config)?;

    let mut chooser = CommandChooser::from_config(config);
    let mut notifier = CommandNotifier::from_config(config);

    let completion =
        Dispatcher::new(config, store, &mut chooser, &mut clipboard, &mut notifier).run()?;
    debug!(?completion, "interactive cycle finished");

    // Not after the user deleted the last record themselves
    if completion == Completion::Empty {
        output::hint("no credentials stored, add one with: credmenu -u NAME -p SECRET");
    }

    Ok(())
}
