//! MJON encoding.
//!
//! [`encode`] walks a [`MjonValue`] tree and writes one line per scalar or
//! container header:
//!
//! - Mapping entries become `@key: value`, or `@key:` followed by the nested
//!   block one level deeper
//! - List items become `* value`, or a lone `*` followed by the nested block
//! - Each level is indented by [`MjonOptions::indent`] spaces (two by default)
//!
//! ```rust
//! use serde_mjon::{encode, mjon};
//!
//! let value = mjon!({
//!     "meta": { "version": 1.5 },
//!     "tags": ["a", "b"]
//! });
//! assert_eq!(
//!     encode(&value, 0),
//!     "@meta:\n  @version: 1.5\n@tags:\n  * a\n  * b"
//! );
//! ```
//!
//! The [`to_value`](crate::to_value) bridge lives here too: it turns any
//! `T: Serialize` into a [`MjonValue`] so the encoder can write it.

use crate::{Error, MjonMap, MjonOptions, MjonValue, Number, Result};
use serde::{ser, Serialize};

/// Encodes a value tree starting at nesting level `indent`, two spaces per level.
#[must_use]
pub fn encode(value: &MjonValue, indent: usize) -> String {
    encode_with_options(value, indent, &MjonOptions::default())
}

/// Encodes a value tree with the indentation width taken from `options`.
///
/// # Examples
///
/// ```rust
/// use serde_mjon::{encode_with_options, mjon, MjonOptions};
///
/// let value = mjon!({ "a": { "b": true } });
/// let text = encode_with_options(&value, 0, &MjonOptions::new().with_indent(4));
/// assert_eq!(text, "@a:\n    @b: true");
/// ```
#[must_use]
pub fn encode_with_options(value: &MjonValue, indent: usize, options: &MjonOptions) -> String {
    let mut encoder = Encoder::new(options.indent);
    encoder.write_value(value, indent);
    encoder.into_inner()
}

struct Encoder {
    output: String,
    indent_width: usize,
}

impl Encoder {
    fn new(indent_width: usize) -> Self {
        Encoder {
            output: String::with_capacity(256),
            // Zero-width levels would flatten nested blocks into their parent.
            indent_width: indent_width.max(1),
        }
    }

    fn into_inner(self) -> String {
        self.output
    }

    fn start_line(&mut self, depth: usize) {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        for _ in 0..depth * self.indent_width {
            self.output.push(' ');
        }
    }

    fn write_scalar(&mut self, value: &MjonValue) {
        use std::fmt::Write;
        // Writing into a String cannot fail.
        let _ = write!(self.output, "{}", value);
    }

    fn write_value(&mut self, value: &MjonValue, depth: usize) {
        match value {
            MjonValue::Object(map) => {
                for (key, val) in map.iter() {
                    self.start_line(depth);
                    self.output.push('@');
                    self.output.push_str(key);
                    self.output.push(':');
                    if val.is_container() {
                        self.write_value(val, depth + 1);
                    } else {
                        self.output.push(' ');
                        self.write_scalar(val);
                    }
                }
            }
            MjonValue::Array(items) => {
                for item in items {
                    self.start_line(depth);
                    self.output.push('*');
                    if item.is_container() {
                        self.write_value(item, depth + 1);
                    } else {
                        self.output.push(' ');
                        self.write_scalar(item);
                    }
                }
            }
            scalar => {
                self.start_line(depth);
                self.write_scalar(scalar);
            }
        }
    }
}

/// Serializes into an optional value: `None`, unit and unit structs produce
/// nothing, which mappings skip and lists reject.
pub(crate) struct ValueSerializer;

pub(crate) fn to_value_opt<T>(value: &T) -> Result<Option<MjonValue>>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

fn to_element<T>(value: &T) -> Result<MjonValue>
where
    T: ?Sized + Serialize,
{
    to_value_opt(value)?.ok_or_else(|| Error::unsupported_type("null as a list element"))
}

fn to_key<T>(key: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match to_value_opt(key)? {
        Some(MjonValue::String(s)) => Ok(s),
        Some(MjonValue::Number(n)) => Ok(n.to_string()),
        Some(MjonValue::Bool(b)) => Ok(b.to_string()),
        _ => Err(Error::unsupported_type(
            "mapping keys must be strings, numbers or booleans",
        )),
    }
}

fn single_entry(key: &str, value: MjonValue) -> MjonValue {
    let mut map = MjonMap::with_capacity(1);
    map.insert(key.to_string(), value);
    MjonValue::Object(map)
}

pub(crate) struct SerializeVec {
    vec: Vec<MjonValue>,
}

pub(crate) struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<MjonValue>,
}

pub(crate) struct SerializeMap {
    map: MjonMap,
    current_key: Option<String>,
}

pub(crate) struct SerializeStructVariant {
    variant: &'static str,
    map: MjonMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Option<MjonValue>;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(Some(MjonValue::Bool(v)))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        Ok(Some(MjonValue::Number(Number::Integer(v))))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        match i64::try_from(v) {
            Ok(i) => self.serialize_i64(i),
            Err(_) => self.serialize_f64(v as f64),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        Ok(Some(MjonValue::Number(Number::Float(v))))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Ok(Some(MjonValue::String(v.to_string())))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(Some(MjonValue::String(v.to_string())))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        Ok(Some(MjonValue::Array(
            v.iter().map(|&b| MjonValue::from(b as i64)).collect(),
        )))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(Some(MjonValue::String(variant.to_string())))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        let inner = to_value_opt(value)?
            .ok_or_else(|| Error::unsupported_type("null as a variant payload"))?;
        Ok(Some(single_entry(variant, inner)))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SerializeMap {
            map: MjonMap::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            map: MjonMap::with_capacity(len),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Option<MjonValue>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_element(value)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(MjonValue::Array(self.vec)))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Option<MjonValue>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Option<MjonValue>;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Option<MjonValue>;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_element(value)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(single_entry(self.variant, MjonValue::Array(self.vec))))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Option<MjonValue>;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(to_key(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        if let Some(value) = to_value_opt(value)? {
            self.map.insert(key, value);
        }
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(MjonValue::Object(self.map)))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Option<MjonValue>;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if let Some(value) = to_value_opt(value)? {
            self.map.insert(key.to_string(), value);
        }
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        ser::SerializeMap::end(self)
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Option<MjonValue>;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if let Some(value) = to_value_opt(value)? {
            self.map.insert(key.to_string(), value);
        }
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(single_entry(self.variant, MjonValue::Object(self.map))))
    }
}
