//! Record type.
//!
//! One stored (identifier, secret, annotation) triple.

use zeroize::Zeroize;

/// A stored credential.
///
/// Equality is structural over all three fields. The secret is wiped from
/// memory when the record is dropped.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Record {
    identifier: String,
    secret: String,
    annotation: String,
}

impl Record {
    /// Create a new record.
    ///
    /// An empty `identifier` is replaced by `default_identifier`. Fields must
    /// not contain newlines; the store format has no escaping and a newline
    /// would shift every following record.
    pub fn new(
        identifier: impl Into<String>,
        secret: impl Into<String>,
        annotation: impl Into<String>,
        default_identifier: &str,
    ) -> Self {
        let identifier = identifier.into();
        let identifier = if identifier.is_empty() {
            default_identifier.to_string()
        } else {
            identifier
        };

        Self {
            identifier,
            secret: secret.into(),
            annotation: annotation.into(),
        }
    }

    /// Display name, never empty when built through [`Record::new`].
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Free-form note, may be empty.
    pub fn annotation(&self) -> &str {
        &self.annotation
    }
}

impl Drop for Record {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("identifier", &self.identifier)
            .field("secret", &"[redacted]")
            .field("annotation", &self.annotation)
            .finish()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier)
    }
}
