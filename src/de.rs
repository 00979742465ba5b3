//! MJON decoding.
//!
//! This module turns MJON text into [`MjonValue`] trees and, through the
//! value tree, into any `T: Deserialize`.
//!
//! ## Overview
//!
//! - **Line-oriented**: blank lines are dropped, trailing whitespace is
//!   trimmed, and the count of leading whitespace characters is a line's depth
//! - **Recursive descent**: each block is parsed by one call that stops at
//!   the first line indented less than the block
//! - **Lenient**: unknown lines are skipped; the only default failure is an
//!   `@` line without a colon
//!
//! ## Usage
//!
//! ```rust
//! use serde_mjon::{decode, MjonValue};
//!
//! let text = "@tags:\n  * a\n  * b\n@next: 1";
//! let value = decode(text).unwrap();
//! assert_eq!(
//!     value.get("tags"),
//!     Some(&MjonValue::Array(vec![MjonValue::from("a"), MjonValue::from("b")]))
//! );
//! assert_eq!(value.get("next"), Some(&MjonValue::from(1)));
//! ```

use crate::options::{DuplicateKeys, OrphanItems};
use crate::{Error, MjonMap, MjonOptions, MjonValue, Number, Result};
use serde::de::{Deserializer as _, IntoDeserializer};
use serde::{de, forward_to_deserialize_any};

/// Decodes MJON text with default options.
///
/// # Errors
///
/// Returns [`Error::InvalidKeyLine`] when an `@` line has no `:`.
pub fn decode(text: &str) -> Result<MjonValue> {
    decode_with_options(text, &MjonOptions::default())
}

/// Decodes MJON text with explicit duplicate-key and orphan-item policies.
///
/// # Errors
///
/// Returns [`Error::InvalidKeyLine`], and with strict policies also
/// [`Error::DuplicateKey`] or [`Error::OrphanItems`].
pub fn decode_with_options(text: &str, options: &MjonOptions) -> Result<MjonValue> {
    Deserializer::with_options(text, options.clone()).parse()
}

/// Coerces the text of a scalar the way the decoder does.
///
/// Booleans match case-insensitively, then `i64` integers, then floats;
/// anything else stays a string, untouched.
///
/// # Examples
///
/// ```rust
/// use serde_mjon::{parse_scalar, MjonValue, Number};
///
/// assert_eq!(parse_scalar("TRUE"), MjonValue::Bool(true));
/// assert_eq!(parse_scalar("42"), MjonValue::Number(Number::Integer(42)));
/// assert_eq!(parse_scalar("3.14"), MjonValue::Number(Number::Float(3.14)));
/// assert_eq!(parse_scalar("42abc"), MjonValue::from("42abc"));
/// ```
#[must_use]
pub fn parse_scalar(text: &str) -> MjonValue {
    if text.eq_ignore_ascii_case("true") {
        return MjonValue::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return MjonValue::Bool(false);
    }
    if let Ok(i) = text.parse::<i64>() {
        return MjonValue::Number(Number::Integer(i));
    }
    if let Ok(f) = text.parse::<f64>() {
        return MjonValue::Number(Number::Float(f));
    }
    MjonValue::String(text.to_string())
}

/// One non-blank input line.
#[derive(Clone, Copy, Debug)]
struct Line<'de> {
    /// 1-based line number in the original text.
    number: usize,
    /// The line with trailing whitespace removed.
    text: &'de str,
    indent: usize,
    content: &'de str,
}

impl<'de> Line<'de> {
    fn new(number: usize, raw: &'de str) -> Self {
        let text = raw.trim_end();
        let content = text.trim_start();
        Line {
            number,
            text,
            indent: text[..text.len() - content.len()].chars().count(),
            content,
        }
    }

    fn is_structural(&self) -> bool {
        self.content.starts_with('@') || self.content.starts_with('*')
    }
}

/// Items collected for a list whose owner is not known yet.
struct PendingList {
    /// Cursor position of the first item, for error reporting.
    first: usize,
    items: Vec<MjonValue>,
}

/// The MJON deserializer.
///
/// Holds the line buffer and the cursor shared by the recursive block
/// parser. Created via [`Deserializer::from_str`] or
/// [`Deserializer::with_options`].
pub struct Deserializer<'de> {
    lines: Vec<Line<'de>>,
    pos: usize,
    options: MjonOptions,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Self::with_options(input, MjonOptions::default())
    }

    pub fn with_options(input: &'de str, options: MjonOptions) -> Self {
        let lines = input
            .lines()
            .enumerate()
            .filter(|(_, raw)| !raw.trim().is_empty())
            .map(|(i, raw)| Line::new(i + 1, raw))
            .collect();
        Deserializer {
            lines,
            pos: 0,
            options,
        }
    }

    /// Parses the whole document from the first line.
    ///
    /// # Errors
    ///
    /// See [`decode_with_options`].
    pub fn parse(&mut self) -> Result<MjonValue> {
        self.pos = 0;
        self.parse_block(0)
    }

    /// Moves the cursor to the next key or item line, `None` at end of input.
    ///
    /// Lines starting with neither `@` nor `*` never affect structure, so
    /// they are consumed here whatever their indentation.
    fn next_line(&mut self) -> Option<Line<'de>> {
        while let Some(line) = self.lines.get(self.pos) {
            if line.is_structural() {
                return Some(*line);
            }
            self.pos += 1;
        }
        None
    }

    /// Indentation of the next structural line when it opens a nested block
    /// below a line indented by `indent`.
    fn nested_below(&mut self, indent: usize) -> Option<usize> {
        self.next_line()
            .map(|line| line.indent)
            .filter(|&next| next > indent)
    }

    /// Parses lines indented by at least `min_indent` into one value.
    ///
    /// Stops without consuming the first key or item line indented less than
    /// `min_indent`. A block made only of `*` items is a list; anything with
    /// a key line is a mapping.
    fn parse_block(&mut self, min_indent: usize) -> Result<MjonValue> {
        let mut result = MjonMap::new();
        let mut current_key: Option<String> = None;
        let mut pending: Option<PendingList> = None;

        while let Some(line) = self.next_line() {
            if line.indent < min_indent {
                break;
            }

            // Structural lines start with an ASCII marker.
            let (marker, rest) = line.content.split_at(1);
            if marker == "@" {
                if let Some(list) = pending.take() {
                    self.flush(&mut result, current_key.as_deref(), list)?;
                }

                let (key, scalar) = rest
                    .split_once(':')
                    .ok_or_else(|| Error::invalid_key_line(line.number, line.text))?;
                let key = key.trim();

                if self.options.duplicate_keys == DuplicateKeys::Reject
                    && result.contains_key(key)
                {
                    return Err(Error::duplicate_key(line.number, key));
                }

                self.pos += 1;
                let value = match self.nested_below(line.indent) {
                    Some(nested) => self.parse_block(nested)?,
                    None => parse_scalar(scalar.trim()),
                };
                result.insert(key.to_string(), value);
                current_key = Some(key.to_string());
            } else {
                let list = pending.get_or_insert_with(|| PendingList {
                    first: self.pos,
                    items: Vec::new(),
                });

                self.pos += 1;
                let item = match self.nested_below(line.indent) {
                    Some(nested) => self.parse_block(nested)?,
                    None => parse_scalar(rest.trim()),
                };
                list.items.push(item);
            }
        }

        match (pending, current_key) {
            (Some(list), None) => Ok(MjonValue::Array(list.items)),
            (Some(list), Some(key)) => {
                result.insert(key, MjonValue::Array(list.items));
                Ok(MjonValue::Object(result))
            }
            (None, _) => Ok(MjonValue::Object(result)),
        }
    }

    /// Attaches a finished list to the key it follows, or applies the orphan
    /// policy when no key precedes it in the block.
    fn flush(&self, result: &mut MjonMap, owner: Option<&str>, list: PendingList) -> Result<()> {
        match owner {
            Some(key) => {
                result.insert(key.to_string(), MjonValue::Array(list.items));
                Ok(())
            }
            None => match self.options.orphan_items {
                OrphanItems::Discard => Ok(()),
                OrphanItems::Reject => {
                    let line = self.lines[list.first];
                    Err(Error::orphan_items(line.number, line.text))
                }
            },
        }
    }
}

macro_rules! forward_to_value {
    ($($method:ident)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                ValueDeserializer::new(self.parse()?).$method(visitor)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    forward_to_value! {
        deserialize_any deserialize_bool deserialize_i8 deserialize_i16
        deserialize_i32 deserialize_i64 deserialize_u8 deserialize_u16
        deserialize_u32 deserialize_u64 deserialize_f32 deserialize_f64
        deserialize_char deserialize_str deserialize_string deserialize_bytes
        deserialize_byte_buf deserialize_option deserialize_unit deserialize_seq
        deserialize_map deserialize_identifier deserialize_ignored_any
    }

    fn deserialize_unit_struct<V>(self, name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse()?).deserialize_unit_struct(name, visitor)
    }

    fn deserialize_newtype_struct<V>(self, name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse()?).deserialize_newtype_struct(name, visitor)
    }

    fn deserialize_tuple<V>(self, len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse()?).deserialize_tuple(len, visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse()?).deserialize_tuple_struct(name, len, visitor)
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse()?).deserialize_struct(name, fields, visitor)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse()?).deserialize_enum(name, variants, visitor)
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<MjonValue>,
}

impl SeqDeserializer {
    fn new(vec: Vec<MjonValue>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, MjonValue>,
    value: Option<MjonValue>,
}

impl MapDeserializer {
    fn new(map: MjonMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(KeyDeserializer { key }).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

/// Mapping keys are always text; numeric and boolean key types parse it.
struct KeyDeserializer {
    key: String,
}

macro_rules! deserialize_parsed_key {
    ($($method:ident => $visit:ident: $expected:literal,)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                match self.key.parse() {
                    Ok(parsed) => visitor.$visit(parsed),
                    Err(_) => Err(Error::type_mismatch($expected, "string key")),
                }
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for KeyDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_string(self.key)
    }

    deserialize_parsed_key! {
        deserialize_bool => visit_bool: "boolean key",
        deserialize_i8 => visit_i8: "integer key",
        deserialize_i16 => visit_i16: "integer key",
        deserialize_i32 => visit_i32: "integer key",
        deserialize_i64 => visit_i64: "integer key",
        deserialize_u8 => visit_u8: "integer key",
        deserialize_u16 => visit_u16: "integer key",
        deserialize_u32 => visit_u32: "integer key",
        deserialize_u64 => visit_u64: "integer key",
        deserialize_f32 => visit_f32: "float key",
        deserialize_f64 => visit_f64: "float key",
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_enum(self.key.into_deserializer())
    }

    forward_to_deserialize_any! {
        i128 u128 char str string bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct EnumDeserializer {
    variant: String,
    value: MjonValue,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(KeyDeserializer { key: self.variant })?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: MjonValue,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            MjonValue::String(s) if s.is_empty() => Ok(()),
            other => Err(Error::type_mismatch("unit variant", other.type_name())),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            MjonValue::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            other => Err(Error::type_mismatch("tuple variant", other.type_name())),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            MjonValue::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            other => Err(Error::type_mismatch("struct variant", other.type_name())),
        }
    }
}

/// Feeds an already-decoded [`MjonValue`] to a `Deserialize` impl.
///
/// MJON scalars carry no type tags, so string requests accept any scalar
/// and render it back to text.
pub(crate) struct ValueDeserializer {
    value: MjonValue,
}

impl ValueDeserializer {
    pub(crate) fn new(value: MjonValue) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            MjonValue::Bool(b) => visitor.visit_bool(b),
            MjonValue::Number(Number::Integer(i)) => visitor.visit_i64(i),
            MjonValue::Number(Number::Float(f)) => visitor.visit_f64(f),
            MjonValue::String(s) => visitor.visit_string(s),
            MjonValue::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            MjonValue::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            MjonValue::String(s) => visitor.visit_string(s),
            MjonValue::Bool(b) => visitor.visit_string(b.to_string()),
            MjonValue::Number(n) => visitor.visit_string(n.to_string()),
            other => Err(Error::type_mismatch("string", other.type_name())),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    /// `@key:` with nothing after it decodes to an empty string, the closest
    /// MJON gets to a unit.
    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            MjonValue::String(s) if s.is_empty() => visitor.visit_unit(),
            other => Err(Error::type_mismatch("unit", other.type_name())),
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            MjonValue::String(s) => visitor.visit_enum(s.into_deserializer()),
            MjonValue::Object(obj) => {
                let mut entries = obj.into_iter();
                match (entries.next(), entries.next()) {
                    (Some((variant, value)), None) => {
                        visitor.visit_enum(EnumDeserializer { variant, value })
                    }
                    _ => Err(Error::custom(
                        "expected a mapping with exactly one key for an enum variant",
                    )),
                }
            }
            other => Err(Error::type_mismatch("enum", other.type_name())),
        }
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    /// An empty container encodes as a bare `@key:`, which reads back as an
    /// empty string.
    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            MjonValue::String(s) if s.is_empty() => {
                visitor.visit_seq(SeqDeserializer::new(Vec::new()))
            }
            other => ValueDeserializer::new(other).deserialize_any(visitor),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            MjonValue::String(s) if s.is_empty() => {
                visitor.visit_map(MapDeserializer::new(MjonMap::new()))
            }
            other => ValueDeserializer::new(other).deserialize_any(visitor),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64
        bytes byte_buf ignored_any
    }
}
