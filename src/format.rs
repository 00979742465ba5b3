//! MJON Format Reference
//!
//! This module documents the MJON notation as read and written by this crate.
//! It contains no code.
//!
//! # Overview
//!
//! MJON is a line-oriented notation for nested mappings and lists. Structure
//! comes from two line prefixes and from indentation; there are no brackets,
//! quotes or escapes.
//!
//! ```text
//! @summary: compact structured text
//! @meta:
//!   @version: 1.0
//!   @timestamp: 1716361440
//! @tags:
//!   * compression
//!   * nesting
//! @steps:
//!   *
//!     @order: 1
//!     @action: build the format
//!   *
//!     @order: 2
//!     @action: ship it
//! ```
//!
//! # Lines
//!
//! | Line | Meaning |
//! |------|---------|
//! | `@key: value` | mapping entry with a scalar value |
//! | `@key:` | mapping entry whose value is the more-indented block below |
//! | `* value` | list item with a scalar value |
//! | `*` | list item whose value is the more-indented block below |
//! | anything else | ignored |
//! | blank | ignored, carries no structure |
//!
//! The key is the text between `@` and the first `:`, trimmed. Everything
//! after that colon, trimmed, is the scalar; later colons belong to the value.
//! A key line without any colon is the one hard error.
//!
//! # Indentation
//!
//! A line's depth is the number of leading whitespace characters. Tabs count
//! as one character each, so mixing tabs and spaces is not recommended.
//! Nothing requires a fixed step: a line opens a nested block whenever the
//! next line is indented more, and a block ends at the first line indented
//! less than the block's first line. The encoder writes two spaces per level
//! unless configured otherwise.
//!
//! # Blocks
//!
//! A block whose lines are all `*` items is a list. A block with at least one
//! `@` line is a mapping. Inside a mapping block:
//!
//! - `*` lines that follow an `@key` line at the same depth become a list that
//!   replaces that key's value once the next key line, or the end of the
//!   block, is reached
//! - `*` lines before the first `@key` line have no owner and are dropped,
//!   or rejected with [`OrphanItems::Reject`](crate::OrphanItems)
//! - a repeated key overwrites the earlier value in place, or is rejected
//!   with [`DuplicateKeys::Reject`](crate::DuplicateKeys)
//!
//! # Scalars
//!
//! | Text | Decoded as |
//! |------|------------|
//! | `true`, `FALSE`, `True` | boolean (case-insensitive) |
//! | `42`, `-7` | integer (`i64`) |
//! | `3.14`, `1e-6`, `2.0`, integers beyond `i64` | float |
//! | anything else | string, verbatim |
//!
//! The encoder writes floats with a fractional part or exponent, so a float
//! reads back as a float.
//!
//! # Limits
//!
//! Because scalars are never quoted, some values cannot round-trip:
//!
//! - strings that look like booleans or numbers (`"42"` reads back as `42`)
//! - strings with leading or trailing whitespace, or with line breaks
//! - empty mappings and lists (they read back as an empty string, which
//!   typed deserialization accepts as an empty collection)
//! - null: there is none; optional fields are simply left out
