//! Selector protocol.
//!
//! Records are shown to an external chooser as fixed-width text lines. The
//! chooser prints the picked line and signals which key confirmed it through
//! its exit status:
//!
//! | exit status | meaning                       | action           |
//! |-------------|-------------------------------|------------------|
//! | 0           | default confirm               | `CopySecret`     |
//! | 10          | custom binding 1              | `CopySecret`     |
//! | 11          | custom binding 2              | `CopyIdentifier` |
//! | 12          | custom binding 3              | `Delete`         |
//! | 1           | dismissed, only with no line  | no selection     |
//!
//! The picked line is mapped back to a record by re-rendering every record
//! and comparing strings. Two records that render to the same line cannot be
//! told apart; the first one in sorted order wins.

pub mod chooser;

pub use chooser::{Chooser, ChooserOutput, CommandChooser};

use tracing::{debug, warn};

use crate::core::config::Config;
use crate::core::constants::{CANCEL_EXIT_STATUS, CUSTOM_KEY_EXIT_OFFSET};
use crate::core::record::Record;
use crate::error::{Result, SelectorError};

const CONFIRM_STATUS: i32 = 0;
const COPY_SECRET_STATUS: i32 = CUSTOM_KEY_EXIT_OFFSET + 1;
const COPY_IDENTIFIER_STATUS: i32 = CUSTOM_KEY_EXIT_OFFSET + 2;
const DELETE_STATUS: i32 = CUSTOM_KEY_EXIT_OFFSET + 3;

/// What the user asked to do with the picked record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CopySecret,
    CopyIdentifier,
    Delete,
}

impl Action {
    /// Map a chooser exit status to an action.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::ProtocolViolation` for any status other than
    /// 0, 10, 11 or 12.
    pub fn from_exit_status(status: i32) -> Result<Self> {
        match status {
            CONFIRM_STATUS | COPY_SECRET_STATUS => Ok(Self::CopySecret),
            COPY_IDENTIFIER_STATUS => Ok(Self::CopyIdentifier),
            DELETE_STATUS => Ok(Self::Delete),
            other => Err(SelectorError::ProtocolViolation(other).into()),
        }
    }
}

/// Result of decoding the chooser's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// A record was picked with a recognized key.
    Selected { record: &'a Record, action: Action },
    /// The menu was dismissed, or the line matches no record.
    NoSelection,
}

/// Renders records for the chooser and decodes its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    width: usize,
}

impl Selector {
    /// Create a selector padding fields to `width` columns.
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.selector.width)
    }

    /// Render one record as `identifier`, padding, `secret`, padding,
    /// `annotation`.
    ///
    /// Padding is `width - len(field)` spaces, counted in characters. A
    /// field at least `width` characters long gets no padding at all, so it
    /// runs straight into the next field.
    pub fn render_line(&self, record: &Record) -> String {
        let identifier_pad = self.width.saturating_sub(record.identifier().chars().count());
        let secret_pad = self.width.saturating_sub(record.secret().chars().count());

        format!(
            "{}{}{}{}{}",
            record.identifier(),
            " ".repeat(identifier_pad),
            record.secret(),
            " ".repeat(secret_pad),
            record.annotation()
        )
    }

    /// Render every record, preserving order.
    pub fn render(&self, records: &[Record]) -> Vec<String> {
        records.iter().map(|r| self.render_line(r)).collect()
    }

    /// Decode the chooser's output and exit status.
    ///
    /// Empty output with status 0, 1 or a custom-binding status means the
    /// menu was dismissed. A line that matches no record is also treated as
    /// no selection.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::ProtocolViolation` for an unrecognized status,
    /// including status 1 accompanied by a selected line.
    pub fn decode<'a>(
        &self,
        records: &'a [Record],
        output: &str,
        status: i32,
    ) -> Result<Outcome<'a>> {
        let line = strip_line_ending(output);

        if line.is_empty() {
            if status == CANCEL_EXIT_STATUS {
                debug!(status, "chooser dismissed");
                return Ok(Outcome::NoSelection);
            }
            Action::from_exit_status(status)?;
            debug!(status, "chooser returned no line");
            return Ok(Outcome::NoSelection);
        }

        let action = Action::from_exit_status(status)?;

        match records.iter().find(|r| self.render_line(r) == line) {
            Some(record) => {
                debug!(status, ?action, identifier = record.identifier(), "decoded selection");
                Ok(Outcome::Selected { record, action })
            }
            None => {
                warn!(status, "selected line matches no stored record");
                Ok(Outcome::NoSelection)
            }
        }
    }
}

/// Strip the single trailing `\n` the chooser appends. A `\r` before it
/// belongs to the line.
fn strip_line_ending(output: &str) -> &str {
    output.strip_suffix('\n').unwrap_or(output)
}
