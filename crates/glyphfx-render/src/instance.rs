//! Per-instance identifier scoping.
//!
//! Several effect instances can be rendered into one document at the same
//! time. Every identifier a backend generates (gradient, filter, clip path)
//! is derived from the caller's [`InstanceKey`], never from shared state.

use std::fmt::Write;
use uuid::Uuid;

/// Prefix of every generated identifier; also keeps ids starting with a letter.
const ID_PREFIX: &str = "te";

/// Caller-supplied scope for generated identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceKey {
    raw: String,
    escaped: String,
}

impl InstanceKey {
    /// Create a key from the owning entity's identifier.
    pub fn new(key: impl Into<String>) -> Self {
        let raw = key.into();
        let escaped = escape_key(&raw);
        Self { raw, escaped }
    }

    /// Create a fresh random key.
    pub fn random() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    /// The key as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Identifier for a definition owned by this instance.
    ///
    /// Distinct keys never produce overlapping identifiers: the escaped key
    /// contains no `-`, so it is always delimited by the prefix and suffix.
    pub fn scoped_id(&self, suffix: &str) -> String {
        format!("{ID_PREFIX}-{}-{suffix}", self.escaped)
    }
}

/// Keep ASCII alphanumerics, encode everything else as `_` plus six hex digits.
fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else {
            let _ = write!(out, "_{:06x}", c as u32);
        }
    }
    out
}
