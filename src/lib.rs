//! # serde_mjon
//!
//! An encoder and decoder for MJON, a compact indentation-delimited notation
//! for nested mappings, lists and scalars, with Serde integration.
//!
//! ## What is MJON?
//!
//! MJON marks mapping keys with `@` and list items with `*`, and uses
//! indentation alone for nesting:
//!
//! ```text
//! @name: Alice
//! @tags:
//!   * admin
//!   * ops
//! ```
//!
//! There are no quotes or escapes; scalars are typed by coercion (boolean,
//! integer, float, otherwise string). See [`format`] for the full notation.
//!
//! ## Quick Start
//!
//! ### Dynamic values
//!
//! ```rust
//! use serde_mjon::{decode, encode, MjonValue};
//!
//! let text = "@name: Alice\n@tags:\n  * admin\n  * ops";
//! let value = decode(text).unwrap();
//! assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(encode(&value, 0), text);
//! ```
//!
//! ### Typed values
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_mjon::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "@id: 123\n@name: Alice\n@active: true");
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ### Building values with `mjon!`
//!
//! ```rust
//! use serde_mjon::{encode, mjon};
//!
//! let data = mjon!({
//!     "steps": [
//!         { "order": 1, "action": "build" }
//!     ]
//! });
//! assert_eq!(encode(&data, 0), "@steps:\n  *\n    @order: 1\n    @action: build");
//! ```
//!
//! ## Leniency
//!
//! The decoder favours best-effort reconstruction: unknown lines are skipped,
//! dedents end blocks, and the only default error is a key line without a
//! colon. Stricter handling of duplicate keys and ownerless list items is
//! available through [`MjonOptions`].

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::{decode, decode_with_options, parse_scalar, Deserializer};
pub use error::{Error, Result};
pub use map::MjonMap;
pub use options::{DuplicateKeys, MjonOptions, OrphanItems};
pub use ser::{encode, encode_with_options};
pub use value::{MjonValue, Number};

use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to an MJON string.
///
/// # Errors
///
/// Returns an error if the value cannot be represented in MJON, such as a
/// bare `None` at the root or inside a list.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, MjonOptions::default())
}

/// Serialize any `T: Serialize` to an MJON string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_mjon::{to_string_with_options, MjonOptions};
/// use std::collections::BTreeMap;
///
/// let mut map = BTreeMap::new();
/// map.insert("nums", vec![1, 2]);
/// let text = to_string_with_options(&map, MjonOptions::new().with_indent(4)).unwrap();
/// assert_eq!(text, "@nums:\n    * 1\n    * 2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented in MJON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: MjonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(encode_with_options(&value, 0, &options))
}

/// Convert any `T: Serialize` to a `MjonValue`.
///
/// Fields holding `None` are left out of the resulting mapping.
///
/// # Examples
///
/// ```rust
/// use serde_mjon::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: Option<i32> }
///
/// let value = to_value(&Point { x: 1, y: None }).unwrap();
/// assert_eq!(value.as_object().map(|o| o.len()), Some(1));
/// ```
///
/// # Errors
///
/// Returns an error if the value is null at the root or contains nulls in
/// lists.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<MjonValue>
where
    T: ?Sized + Serialize,
{
    ser::to_value_opt(value)?
        .ok_or_else(|| Error::unsupported_type("null at the document root"))
}

/// Serialize any `T: Serialize` to a writer in MJON format.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of MJON text.
///
/// # Examples
///
/// ```rust
/// use serde_mjon::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("@x: 1\n@y: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the text is not valid MJON or does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str(s);
    T::deserialize(&mut deserializer)
}

/// Deserialize an instance of type `T` from MJON text using custom options.
///
/// # Errors
///
/// Returns an error if the text violates the configured policies or does
/// not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<'a, T>(s: &'a str, options: MjonOptions) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::with_options(s, options);
    T::deserialize(&mut deserializer)
}

/// Deserialize an instance of type `T` from an already-decoded `MjonValue`.
///
/// # Examples
///
/// ```rust
/// use serde_mjon::{from_value, mjon};
///
/// let tags: Vec<String> = from_value(mjon!(["a", "b"])).unwrap();
/// assert_eq!(tags, vec!["a", "b"]);
/// ```
///
/// # Errors
///
/// Returns an error if the value does not fit `T`.
pub fn from_value<T>(value: MjonValue) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    T::deserialize(de::ValueDeserializer::new(value))
}

/// Deserialize an instance of type `T` from an I/O stream of MJON.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid MJON, or the
/// data does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of MJON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid MJON, or do
/// not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
