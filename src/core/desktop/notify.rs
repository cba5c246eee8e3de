//! Desktop notifications via `notify-send`.

use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::core::config::Config;
use crate::error::{DesktopError, Result};

/// Something that can show a transient message.
pub trait Notifier {
    fn notify(&mut self, timeout_ms: u32, message: &str) -> Result<()>;
}

/// Notifier invoking `<program> -t <timeout_ms> -- <message>`.
///
/// The `--` keeps a message starting with `-` from being read as an option.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    program: String,
}

impl CommandNotifier {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.notify.command.clone())
    }
}

impl Notifier for CommandNotifier {
    fn notify(&mut self, timeout_ms: u32, message: &str) -> Result<()> {
        debug!(program = %self.program, timeout_ms, "sending notification");

        let status = Command::new(&self.program)
            .args(["-t", &timeout_ms.to_string(), "--", message])
            .stdout(Stdio::null())
            .status()
            .map_err(|e| DesktopError::Notify(format!("failed to run {}: {}", self.program, e)))?;

        // The clipboard is already written; a failed popup is not worth failing over
        if !status.success() {
            warn!(program = %self.program, %status, "notification command failed");
        }

        Ok(())
    }
}
