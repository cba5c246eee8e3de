//! Clipboard writer.
//!
//! Pipes text into a clipboard program (`wl-copy`, `xclip`, `xsel`,
//! `pbcopy`, or whatever is configured).

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::core::config::Config;
use crate::core::constants::CLIPBOARD_CANDIDATES;
use crate::core::deps;
use crate::error::{DependencyError, DesktopError, Result};

/// Something that can replace the clipboard contents.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by a program reading the new contents on stdin.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Use the configured clipboard command, or the first known tool found
    /// on `$PATH`.
    ///
    /// # Errors
    ///
    /// Returns `DependencyError::Missing` if the configured program or every
    /// known tool is missing.
    pub fn from_config(config: &Config) -> Result<Self> {
        if let Some((program, args)) = config
            .clipboard
            .command
            .as_ref()
            .and_then(|cmd| cmd.split_first())
        {
            deps::require("clipboard tool", program)?;
            return Ok(Self::new(program.clone(), args.to_vec()));
        }

        match deps::first_available(CLIPBOARD_CANDIDATES).and_then(|cmd| cmd.split_first()) {
            Some((program, args)) => Ok(Self::new(
                *program,
                args.iter().map(|a| a.to_string()).collect(),
            )),
            None => Err(DependencyError::Missing {
                role: "clipboard tool",
                program: "wl-copy, xclip, xsel or pbcopy".to_string(),
            }
            .into()),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        debug!(program = %self.program, len = text.len(), "writing clipboard");

        // xclip and xsel fork to keep serving the selection, so their output
        // must not be piped back or the wait below never returns
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                DesktopError::Clipboard(format!("failed to spawn {}: {}", self.program, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(|e| {
                DesktopError::Clipboard(format!("failed to write to {}: {}", self.program, e))
            })?;
        }

        let status = child
            .wait()
            .map_err(|e| DesktopError::Clipboard(format!("{} failed: {}", self.program, e)))?;

        if !status.success() {
            return Err(DesktopError::Clipboard(format!(
                "{} exited with status: {}",
                self.program, status
            ))
            .into());
        }

        Ok(())
    }
}
