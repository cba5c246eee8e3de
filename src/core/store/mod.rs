//! Credential file storage.
//!
//! The store is a flat text file (see [`codec`]) holding every record. Every
//! mutation is a full load-modify-save of the file. There is no locking: two
//! instances adding or deleting at the same time can lose one of the writes.

pub mod codec;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::core::record::Record;
use crate::error::{Result, StoreError};

/// Flat-file record store.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    default_identifier: String,
}

impl Store {
    /// Create a store backed by `path`.
    ///
    /// `default_identifier` replaces empty identifier lines read from disk.
    pub fn new(path: impl Into<PathBuf>, default_identifier: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            default_identifier: default_identifier.into(),
        }
    }

    /// Create the store configured in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.store_path()?,
            config.selector.default_identifier.clone(),
        ))
    }

    /// Path of the credential file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records, sorted case-insensitively by identifier.
    ///
    /// Creates an empty file first if none exists. Records whose identifiers
    /// compare equal ignoring case keep their file order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Malformed` if the line count is not a multiple
    /// of three, or `StoreError::Read` if the file cannot be read.
    pub fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store missing, creating");
            self.clean()?;
        }

        let contents = Zeroizing::new(fs::read_to_string(&self.path).map_err(StoreError::Read)?);
        let mut records = codec::decode(&contents, &self.default_identifier).map_err(|lines| {
            StoreError::Malformed {
                path: self.path.clone(),
                lines,
            }
        })?;

        records.sort_by_cached_key(|r| r.identifier().to_lowercase());

        debug!(path = %self.path.display(), records = records.len(), "store loaded");
        Ok(records)
    }

    /// Replace the file contents with `records`, in the given order.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        debug!(path = %self.path.display(), records = records.len(), "saving store");

        self.write(&codec::encode(records))
    }

    /// Add a record unless a value-equal one is already stored.
    ///
    /// Returns `true` if the record was written.
    pub fn add(&self, record: Record) -> Result<bool> {
        let mut records = self.load()?;

        if records.contains(&record) {
            debug!(identifier = record.identifier(), "record already stored");
            return Ok(false);
        }

        records.push(record);
        self.save(&records)?;
        Ok(true)
    }

    /// Truncate the file to empty, creating it if absent.
    pub fn clean(&self) -> Result<()> {
        debug!(path = %self.path.display(), "cleaning store");
        self.write("")
    }

    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StoreError::Write)?;
            }
        }

        fs::write(&self.path, contents).map_err(StoreError::Write)?;

        // Restrict permissions on the credential file (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(StoreError::Write)?;
        }

        Ok(())
    }
}
