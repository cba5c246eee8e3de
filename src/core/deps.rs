//! External program resolution.
//!
//! Every collaborator is a separate executable. They are resolved up front so
//! a missing one is reported before the chooser ever opens.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{DependencyError, Result};

/// Resolve `program` on `$PATH` (or as a path).
///
/// # Errors
///
/// Returns `DependencyError::Missing` naming `role` if it cannot be found.
pub fn require(role: &'static str, program: &str) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            debug!(role, program, path = %path.display(), "resolved dependency");
            Ok(path)
        }
        Err(_) => Err(DependencyError::Missing {
            role,
            program: program.to_string(),
        }
        .into()),
    }
}

/// First candidate whose program resolves, if any.
pub fn first_available<'a>(candidates: &[&'a [&'a str]]) -> Option<&'a [&'a str]> {
    candidates
        .iter()
        .copied()
        .find(|cmd| cmd.first().is_some_and(|p| which::which(p).is_ok()))
}
