//! Configuration management.
//!
//! Settings are layered: built-in defaults, then the optional TOML file
//! (`$CREDMENU_CONFIG` or `<config dir>/credmenu/config.toml`), then
//! environment overrides. The CLI applies `--file` on top.
//!
//! ```toml
//! [store]
//! path = "~/.cred"
//!
//! [selector]
//! width = 40
//! default_identifier = "No Name"
//! command = "rofi"
//! args = ["-dmenu", "-i"]
//!
//! [selector.keys]
//! copy_secret = "Ctrl+c"
//! copy_identifier = "Ctrl+C"
//! delete = "Ctrl+D"
//!
//! [clipboard]
//! command = ["xclip", "-selection", "clipboard"]
//!
//! [notify]
//! timeout_ms = 1500
//! reveal_secret = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Full configuration passed to the store, selector and collaborators.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub store: StoreConfig,
    pub selector: SelectorConfig,
    pub clipboard: ClipboardConfig,
    pub notify: NotifyConfig,
}

/// `[store]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Credential file; `~/` is expanded. Defaults to `~/.cred`.
    pub path: Option<PathBuf>,
}

/// `[selector]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// Column width for identifier and secret.
    pub width: usize,
    pub default_identifier: String,
    pub prompt: String,
    /// Chooser program.
    pub command: String,
    /// Arguments passed before the prompt and key bindings.
    pub args: Vec<String>,
    pub keys: KeyBindings,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            width: constants::DEFAULT_WIDTH,
            default_identifier: constants::DEFAULT_IDENTIFIER.to_string(),
            prompt: constants::DEFAULT_PROMPT.to_string(),
            command: constants::DEFAULT_CHOOSER.to_string(),
            args: vec!["-dmenu".to_string()],
            keys: KeyBindings::default(),
        }
    }
}

/// Key combinations registered as chooser custom bindings 1-3.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindings {
    pub copy_secret: String,
    pub copy_identifier: String,
    pub delete: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            copy_secret: constants::KEY_COPY_SECRET.to_string(),
            copy_identifier: constants::KEY_COPY_IDENTIFIER.to_string(),
            delete: constants::KEY_DELETE.to_string(),
        }
    }
}

/// `[clipboard]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardConfig {
    /// Program and arguments reading the new contents from stdin.
    /// Probed from a list of known tools when unset.
    pub command: Option<Vec<String>>,
}

/// `[notify]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotifyConfig {
    pub command: String,
    pub timeout_ms: u32,
    /// Put the copied secret itself into the notification text.
    pub reveal_secret: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            command: constants::DEFAULT_NOTIFIER.to_string(),
            timeout_ms: constants::DEFAULT_NOTIFY_TIMEOUT_MS,
            reveal_secret: false,
        }
    }
}

impl Config {
    /// Load defaults, the config file if present, and environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if an explicitly named config file cannot
    /// be read, `ConfigError::Parse` on malformed TOML, and
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(constants::ENV_CONFIG).map(PathBuf::from);

        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("no config file, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Default config location (`<config dir>/credmenu/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse config from a TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(constants::ENV_FILE).filter(|v| !v.is_empty()) {
            self.store.path = Some(PathBuf::from(path));
        }
        if let Some(chooser) = lookup(constants::ENV_CHOOSER).filter(|v| !v.is_empty()) {
            self.selector.command = chooser;
        }
        if let Some(clipboard) = lookup(constants::ENV_CLIPBOARD) {
            let parts: Vec<String> = clipboard.split_whitespace().map(str::to_string).collect();
            if !parts.is_empty() {
                self.clipboard.command = Some(parts);
            }
        }
        if let Some(notifier) = lookup(constants::ENV_NOTIFIER).filter(|v| !v.is_empty()) {
            self.notify.command = notifier;
        }
    }

    /// Check values that would make the selector protocol unusable.
    pub fn validate(&self) -> Result<()> {
        if self.selector.width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "selector.width",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if self.selector.default_identifier.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "selector.default_identifier",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if self.selector.default_identifier.contains('\n') {
            return Err(ConfigError::InvalidValue {
                field: "selector.default_identifier",
                reason: "cannot contain a newline".to_string(),
            }
            .into());
        }

        if self.selector.command.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "selector.command",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if matches!(&self.clipboard.command, Some(cmd) if cmd.is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "clipboard.command",
                reason: "cannot be an empty list".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Resolved credential file path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHome` if the path needs the home directory
    /// and it cannot be determined.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.store.path {
            Some(path) => expand_home(path),
            None => {
                let home = dirs::home_dir().ok_or(ConfigError::NoHome)?;
                Ok(home.join(constants::STORE_FILE))
            }
        }
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or(ConfigError::NoHome)?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}
