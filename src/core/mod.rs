//! Core library components.
//!
//! Storage, the selector protocol and the interactive cycle, independent of
//! the command-line front end.

pub mod config;
pub mod constants;
pub mod deps;
pub mod desktop;
pub mod dispatch;
pub mod record;
pub mod selector;
pub mod store;
