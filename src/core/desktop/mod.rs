//! Desktop collaborators: clipboard and notifications.
//!
//! Both are thin wrappers around external programs. The traits exist so the
//! dispatcher can be driven by in-memory fakes.

pub mod clipboard;
pub mod notify;

pub use clipboard::{Clipboard, CommandClipboard};
pub use notify::{CommandNotifier, Notifier};
