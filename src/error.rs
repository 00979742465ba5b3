//! Error types for MJON encoding and decoding.
//!
//! The decoder is lenient by design: unknown line prefixes, unexpected dedents
//! and empty blocks never fail. The fatal conditions are:
//!
//! - **Invalid key line**: an `@` line without a `:` separator
//! - **Duplicate key**: only when [`DuplicateKeys::Reject`](crate::DuplicateKeys) is set
//! - **Orphan items**: only when [`OrphanItems::Reject`](crate::OrphanItems) is set
//!
//! The remaining variants come from the Serde bridge (type mismatches,
//! unsupported Rust types) and from reader/writer adapters.
//!
//! ## Examples
//!
//! ```rust
//! use serde_mjon::{decode, Error};
//!
//! let err = decode("@badline").unwrap_err();
//! assert!(matches!(err, Error::InvalidKeyLine { line: 1, .. }));
//! assert!(err.to_string().contains("@badline"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during MJON encoding/decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A key line (`@...`) without the `:` separator.
    #[error("Invalid key line at line {line}: {text}\nHelp: key lines look like '@name: value' or '@name:'")]
    InvalidKeyLine { line: usize, text: String },

    /// A key repeated within one block while duplicate keys are rejected.
    #[error("Duplicate key '{key}' at line {line}")]
    DuplicateKey { line: usize, key: String },

    /// List items with no key to attach to while orphan items are rejected.
    #[error("List items without an owning key at line {line}: {text}")]
    OrphanItems { line: usize, text: String },

    /// Type mismatch during deserialization
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid key line error from the offending line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_mjon::Error;
    ///
    /// let err = Error::invalid_key_line(3, "  @name Alice");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn invalid_key_line(line: usize, text: &str) -> Self {
        Error::InvalidKeyLine {
            line,
            text: text.to_string(),
        }
    }

    /// Creates a duplicate key error.
    pub fn duplicate_key(line: usize, key: &str) -> Self {
        Error::DuplicateKey {
            line,
            key: key.to_string(),
        }
    }

    /// Creates an orphan items error pointing at the first ownerless item.
    pub fn orphan_items(line: usize, text: &str) -> Self {
        Error::OrphanItems {
            line,
            text: text.to_string(),
        }
    }

    /// Creates a type mismatch error when a value cannot fit the requested type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_mjon::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error for values MJON cannot represent.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the 1-based source line for decoder errors.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::InvalidKeyLine { line, .. }
            | Error::DuplicateKey { line, .. }
            | Error::OrphanItems { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
