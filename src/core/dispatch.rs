//! Interactive cycle.
//!
//! Loads the store, shows it in the chooser, decodes the answer and acts on
//! it. Copy actions end the cycle; a delete rewrites the store and shows the
//! shortened list again until the user copies something, dismisses the
//! menu, or the store runs empty.
//!
//! ```text
//! Idle -> Rendering -> AwaitingSelection -> CopySecret     -> done
//!             ^                          -> CopyIdentifier -> done
//!             |                          -> NoSelection    -> done
//!             +------------------------- <- Delete
//! ```
//!
//! The answer is fully decoded before anything is written, so a protocol
//! error leaves the store untouched.

use tracing::debug;

use crate::core::config::{Config, NotifyConfig};
use crate::core::desktop::{Clipboard, Notifier};
use crate::core::record::Record;
use crate::core::selector::{Action, Chooser, Outcome, Selector};
use crate::core::store::Store;
use crate::error::Result;

/// How an interactive cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The secret of the named record is on the clipboard.
    CopiedSecret { identifier: String },
    /// The identifier is on the clipboard.
    CopiedIdentifier { identifier: String },
    /// The menu was dismissed or nothing matched.
    NoSelection,
    /// The store was empty, so the menu never opened.
    Empty,
    /// The user deleted the last record.
    Emptied,
}

/// Drives one interactive cycle against a store.
pub struct Dispatcher<'a> {
    store: &'a Store,
    selector: Selector,
    notify: NotifyConfig,
    chooser: &'a mut dyn Chooser,
    clipboard: &'a mut dyn Clipboard,
    notifier: &'a mut dyn Notifier,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        config: &Config,
        store: &'a Store,
        chooser: &'a mut dyn Chooser,
        clipboard: &'a mut dyn Clipboard,
        notifier: &'a mut dyn Notifier,
    ) -> Self {
        Self {
            store,
            selector: Selector::from_config(config),
            notify: config.notify.clone(),
            chooser,
            clipboard,
            notifier,
        }
    }

    /// Run the cycle until a terminal state is reached.
    ///
    /// # Errors
    ///
    /// Propagates store, chooser, protocol and collaborator errors. None of
    /// them are retried.
    pub fn run(&mut self) -> Result<Completion> {
        let mut deleted = false;
        loop {
            let records = self.store.load()?;
            if records.is_empty() {
                debug!(deleted, "store is empty, nothing to choose from");
                return Ok(if deleted {
                    Completion::Emptied
                } else {
                    Completion::Empty
                });
            }

            let lines = self.selector.render(&records);
            let output = self.chooser.choose(&lines)?;

            let (record, action) =
                match self
                    .selector
                    .decode(&records, &output.selection, output.status)?
                {
                    Outcome::Selected { record, action } => (record.clone(), action),
                    Outcome::NoSelection => return Ok(Completion::NoSelection),
                };

            match action {
                Action::CopySecret => return self.copy_secret(&record),
                Action::CopyIdentifier => return self.copy_identifier(&record),
                Action::Delete => {
                    self.delete(records, &record)?;
                    deleted = true;
                }
            }
        }
    }

    fn copy_secret(&mut self, record: &Record) -> Result<Completion> {
        self.clipboard.copy(record.secret())?;

        let message = if self.notify.reveal_secret {
            format!("{} copied to clipboard", record.secret())
        } else {
            format!("secret for {} copied to clipboard", record.identifier())
        };
        self.notifier.notify(self.notify.timeout_ms, &message)?;

        Ok(Completion::CopiedSecret {
            identifier: record.identifier().to_string(),
        })
    }

    fn copy_identifier(&mut self, record: &Record) -> Result<Completion> {
        self.clipboard.copy(record.identifier())?;

        let message = format!("{} copied to clipboard", record.identifier());
        self.notifier.notify(self.notify.timeout_ms, &message)?;

        Ok(Completion::CopiedIdentifier {
            identifier: record.identifier().to_string(),
        })
    }

    /// Remove the first value-equal record and persist the rest.
    fn delete(&mut self, mut records: Vec<Record>, record: &Record) -> Result<()> {
        if let Some(pos) = records.iter().position(|r| r == record) {
            records.remove(pos);
        }

        debug!(
            identifier = record.identifier(),
            remaining = records.len(),
            "deleting record"
        );
        self.store.save(&records)
    }
}
