//! `--clean` flag.

use crate::cli::output;
use crate::core::store::Store;
use crate::error::Result;

/// Truncate the credential file, creating it if needed.
pub fn execute(store: &Store) -> Result<()> {
    store.clean()?;
    output::success(&format!(
        "cleared {}",
        output::path(&store.path().display().to_string())
    ));
    Ok(())
}
