//! Constants used throughout credmenu.
//!
//! Centralizes defaults that [`Config`](crate::core::config::Config) falls
//! back to when neither the config file nor the environment sets them.

/// Credential file name relative to HOME (~/.cred).
pub const STORE_FILE: &str = ".cred";

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "credmenu";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Column width the identifier and secret are padded to.
pub const DEFAULT_WIDTH: usize = 40;

/// Identifier substituted when a record is created with an empty one.
pub const DEFAULT_IDENTIFIER: &str = "No Name";

/// Chooser program.
pub const DEFAULT_CHOOSER: &str = "rofi";

/// Prompt shown by the chooser.
pub const DEFAULT_PROMPT: &str = "cred";

/// Notification program.
pub const DEFAULT_NOTIFIER: &str = "notify-send";

/// How long the notification stays on screen.
pub const DEFAULT_NOTIFY_TIMEOUT_MS: u32 = 1500;

/// Default key bindings for the three custom chooser actions.
pub const KEY_COPY_SECRET: &str = "Ctrl+c";
pub const KEY_COPY_IDENTIFIER: &str = "Ctrl+C";
pub const KEY_DELETE: &str = "Ctrl+D";

/// rofi exits with `9 + N` when custom binding N confirms a selection.
pub const CUSTOM_KEY_EXIT_OFFSET: i32 = 9;

/// rofi's exit status when the user dismisses the menu.
pub const CANCEL_EXIT_STATUS: i32 = 1;

/// Environment overrides.
pub const ENV_CONFIG: &str = "CREDMENU_CONFIG";
pub const ENV_FILE: &str = "CREDMENU_FILE";
pub const ENV_CHOOSER: &str = "CREDMENU_CHOOSER";
pub const ENV_CLIPBOARD: &str = "CREDMENU_CLIPBOARD";
pub const ENV_NOTIFIER: &str = "CREDMENU_NOTIFIER";
pub const ENV_LOG: &str = "CREDMENU_LOG";

/// Clipboard programs probed in order when none is configured.
pub const CLIPBOARD_CANDIDATES: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["pbcopy"],
];
