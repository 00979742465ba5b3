//! Configuration options for MJON encoding and decoding.
//!
//! - [`MjonOptions`]: Main configuration struct
//! - [`DuplicateKeys`]: What the decoder does with a repeated `@key:` line
//! - [`OrphanItems`]: What the decoder does with `*` items that have no owning key
//!
//! ## Examples
//!
//! ```rust
//! use serde_mjon::{decode_with_options, DuplicateKeys, MjonOptions};
//!
//! let strict = MjonOptions::new().with_duplicate_keys(DuplicateKeys::Reject);
//! assert!(decode_with_options("@a: 1\n@a: 2", &strict).is_err());
//! ```

/// Policy for a key repeated within one block.
///
/// # Examples
///
/// ```rust
/// use serde_mjon::{decode, MjonValue};
///
/// // The default overwrites, keeping the key's first position.
/// let value = decode("@a: 1\n@b: 2\n@a: 3").unwrap();
/// let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
/// assert_eq!(keys, vec!["a", "b"]);
/// assert_eq!(value.get("a"), Some(&MjonValue::from(3)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    #[default]
    Overwrite,
    Reject,
}

/// Policy for `*` items that precede the first key line of a block.
///
/// A block made only of items always becomes a list; this policy covers the
/// mixed case where items appear before any `@key:` line that could own them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrphanItems {
    #[default]
    Discard,
    Reject,
}

/// Configuration options for MJON encoding and decoding.
///
/// # Examples
///
/// ```rust
/// use serde_mjon::{MjonOptions, OrphanItems};
///
/// let options = MjonOptions::new()
///     .with_indent(4)
///     .with_orphan_items(OrphanItems::Reject);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MjonOptions {
    pub indent: usize,
    pub duplicate_keys: DuplicateKeys,
    pub orphan_items: OrphanItems,
}

impl Default for MjonOptions {
    fn default() -> Self {
        MjonOptions {
            indent: 2,
            duplicate_keys: DuplicateKeys::default(),
            orphan_items: OrphanItems::default(),
        }
    }
}

impl MjonOptions {
    /// Creates default options (2-space indent, overwrite duplicates, discard orphans).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_mjon::{DuplicateKeys, MjonOptions};
    ///
    /// let options = MjonOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert_eq!(options.duplicate_keys, DuplicateKeys::Overwrite);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reject both duplicate keys and orphan items.
    #[must_use]
    pub fn strict() -> Self {
        MjonOptions {
            duplicate_keys: DuplicateKeys::Reject,
            orphan_items: OrphanItems::Reject,
            ..Default::default()
        }
    }

    /// Sets the number of spaces the encoder writes per nesting level.
    ///
    /// The decoder does not use this: it compares raw indentation widths.
    /// Nesting needs at least one space per level, so `0` is raised to `1`.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.max(1);
        self
    }

    #[must_use]
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    #[must_use]
    pub fn with_orphan_items(mut self, policy: OrphanItems) -> Self {
        self.orphan_items = policy;
        self
    }
}
