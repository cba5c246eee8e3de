//! External chooser process.
//!
//! The chooser reads the rendered list on stdin, lets the user pick a line,
//! prints it on stdout and reports the confirming key through its exit
//! status. The call blocks until the chooser exits; there is no timeout.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::error::{Result, SelectorError};

/// What the chooser printed and how it exited.
#[derive(Debug)]
pub struct ChooserOutput {
    /// Raw stdout, usually one line with its trailing newline, or empty.
    pub selection: Zeroizing<String>,
    pub status: i32,
}

impl ChooserOutput {
    pub fn new(selection: impl Into<String>, status: i32) -> Self {
        Self {
            selection: Zeroizing::new(selection.into()),
            status,
        }
    }
}

/// Something that shows lines and returns the user's pick.
pub trait Chooser {
    /// Show `lines` and block until the user answers.
    fn choose(&mut self, lines: &[String]) -> Result<ChooserOutput>;
}

/// Chooser backed by a dmenu-style program (rofi by default).
#[derive(Debug, Clone)]
pub struct CommandChooser {
    program: String,
    args: Vec<String>,
}

impl CommandChooser {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build the chooser command line from configuration.
    ///
    /// Registers the three actions as rofi custom bindings 1-3:
    /// `-kb-custom-1 <copy secret> -kb-custom-2 <copy identifier>
    /// -kb-custom-3 <delete>`.
    pub fn from_config(config: &Config) -> Self {
        let selector = &config.selector;
        let mut args = selector.args.clone();
        args.extend([
            "-p".to_string(),
            selector.prompt.clone(),
            "-kb-custom-1".to_string(),
            selector.keys.copy_secret.clone(),
            "-kb-custom-2".to_string(),
            selector.keys.copy_identifier.clone(),
            "-kb-custom-3".to_string(),
            selector.keys.delete.clone(),
        ]);

        Self::new(selector.command.clone(), args)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Chooser for CommandChooser {
    fn choose(&mut self, lines: &[String]) -> Result<ChooserOutput> {
        debug!(program = %self.program, lines = lines.len(), "starting chooser");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| SelectorError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Write the whole list, then close stdin so the chooser sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            let mut input = Zeroizing::new(String::new());
            for line in lines {
                input.push_str(line);
                input.push('\n');
            }

            match stdin.write_all(input.as_bytes()) {
                Ok(()) => {}
                // The chooser may exit without reading its input
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    trace!("chooser closed stdin early");
                }
                Err(e) => return Err(SelectorError::Pipe(e).into()),
            }
        }

        let output = child.wait_with_output().map_err(SelectorError::Pipe)?;
        let status = output.status.code().ok_or(SelectorError::Terminated)?;
        let selection = String::from_utf8_lossy(&output.stdout).into_owned();

        debug!(status, selected = !selection.trim().is_empty(), "chooser exited");
        Ok(ChooserOutput::new(selection, status))
    }
}
