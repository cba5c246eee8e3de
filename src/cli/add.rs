//! Add flags (`-u`, `-p`, `-n`).

use crate::cli::output;
use crate::core::config::Config;
use crate::core::record::Record;
use crate::core::store::Store;
use crate::error::Result;

/// Store one record built from the flags.
///
/// Missing username or password become empty strings; an empty username is
/// replaced by the configured default identifier.
pub fn execute(
    config: &Config,
    store: &Store,
    user: Option<String>,
    password: Option<String>,
    note: Option<String>,
) -> Result<()> {
    let record = Record::new(
        user.unwrap_or_default(),
        password.unwrap_or_default(),
        note.unwrap_or_default(),
        &config.selector.default_identifier,
    );
    let identifier = record.identifier().to_string();

    if store.add(record)? {
        output::success(&format!("added {}", identifier));
    } else {
        output::warn(&format!("{} already stored", identifier));
    }

    Ok(())
}
