//! credmenu - Simple credential manager for CTFs.
//!
//! Keeps short (identifier, secret, note) records in a flat file and lets
//! you pick one from a rofi menu to copy it to the clipboard or delete it.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── add           # -u/-p/-n: store a record
//! │   ├── clean         # --clean: empty the store
//! │   ├── pick          # no flags: interactive menu
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # config.toml + environment overrides
//!     ├── record        # Record value type
//!     ├── store/        # Flat-file storage
//!     ├── selector/     # Line rendering, exit-status protocol, chooser process
//!     ├── desktop/      # Clipboard and notification programs
//!     ├── deps          # External program resolution
//!     └── dispatch      # Interactive cycle
//! ```

pub mod cli;
pub mod core;
pub mod error;
