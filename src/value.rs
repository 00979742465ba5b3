//! Dynamic value representation for MJON data.
//!
//! [`MjonValue`] is the closed union every MJON document decodes into:
//! mappings, lists, booleans, numbers and strings. There is no null; an
//! absent key is the only way to say "nothing".
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_mjon::{mjon, MjonValue};
//!
//! let boolean = MjonValue::from(true);
//! let number = MjonValue::from(42);
//! let text = MjonValue::from("hello");
//!
//! let obj = mjon!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ## Extracting Values
//!
//! ```rust
//! use serde_mjon::MjonValue;
//! use std::convert::TryFrom;
//!
//! let value = MjonValue::from(42);
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::MjonMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed MJON value.
///
/// # Examples
///
/// ```rust
/// use serde_mjon::{MjonValue, Number};
///
/// let num = MjonValue::Number(Number::Integer(42));
/// let text = MjonValue::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum MjonValue {
    Object(MjonMap),
    Array(Vec<MjonValue>),
    Bool(bool),
    Number(Number),
    String(String),
}

/// A numeric scalar: an integer when the text parses as one, a float otherwise.
///
/// # Examples
///
/// ```rust
/// use serde_mjon::Number;
///
/// assert!(Number::Integer(42).is_integer());
/// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
/// assert_eq!(Number::Float(1.0).to_string(), "1.0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Floats convert only when they have no fractional part and fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_mjon::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            // Debug always keeps a fractional part or exponent, so the text
            // reads back as a float rather than an integer.
            Number::Float(fl) => write!(f, "{:?}", fl),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl MjonValue {
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, MjonValue::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, MjonValue::Array(_))
    }

    /// Returns `true` for mappings and lists, the values rendered as nested blocks.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, MjonValue::Object(_) | MjonValue::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, MjonValue::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, MjonValue::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, MjonValue::String(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MjonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MjonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_mjon::{MjonValue, Number};
    ///
    /// assert_eq!(MjonValue::Number(Number::Integer(42)).as_i64(), Some(42));
    /// assert_eq!(MjonValue::Number(Number::Float(42.5)).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MjonValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MjonValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<MjonValue>> {
        match self {
            MjonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&MjonMap> {
        match self {
            MjonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up `key` when the value is a mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_mjon::decode;
    ///
    /// let value = decode("@meta:\n  @version: 2").unwrap();
    /// let version = value.get("meta").and_then(|m| m.get("version"));
    /// assert_eq!(version.and_then(|v| v.as_i64()), Some(2));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MjonValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Short name of the variant, used in type mismatch errors.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            MjonValue::Object(_) => "mapping",
            MjonValue::Array(_) => "list",
            MjonValue::Bool(_) => "boolean",
            MjonValue::Number(Number::Integer(_)) => "integer",
            MjonValue::Number(Number::Float(_)) => "float",
            MjonValue::String(_) => "string",
        }
    }
}

/// Scalars display as they appear after `@key: ` or `* `; containers display
/// as a full MJON document.
impl fmt::Display for MjonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MjonValue::Bool(b) => write!(f, "{}", b),
            MjonValue::Number(n) => write!(f, "{}", n),
            MjonValue::String(s) => f.write_str(s),
            MjonValue::Object(_) | MjonValue::Array(_) => {
                f.write_str(&crate::ser::encode(self, 0))
            }
        }
    }
}

impl Serialize for MjonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            MjonValue::Bool(b) => serializer.serialize_bool(*b),
            MjonValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            MjonValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            MjonValue::String(s) => serializer.serialize_str(s),
            MjonValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            MjonValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for MjonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Unexpected, Visitor};

        struct MjonValueVisitor;

        impl<'de> Visitor<'de> for MjonValueVisitor {
            type Value = MjonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping, list, boolean, number or string")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(MjonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(MjonValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(MjonValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(MjonValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(MjonValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(MjonValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(MjonValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Err(E::invalid_type(Unexpected::Unit, &self))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Err(E::invalid_type(Unexpected::Option, &self))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(MjonValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = MjonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(MjonValue::Object(values))
            }
        }

        deserializer.deserialize_any(MjonValueVisitor)
    }
}

impl TryFrom<MjonValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: MjonValue) -> crate::Result<Self> {
        match value {
            MjonValue::Number(n) => n.as_i64().ok_or_else(|| {
                crate::Error::custom(format!("cannot convert float {} to i64", n))
            }),
            other => Err(crate::Error::type_mismatch("integer", other.type_name())),
        }
    }
}

impl TryFrom<MjonValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: MjonValue) -> crate::Result<Self> {
        match value {
            MjonValue::Number(n) => Ok(n.as_f64()),
            other => Err(crate::Error::type_mismatch("number", other.type_name())),
        }
    }
}

impl TryFrom<MjonValue> for bool {
    type Error = crate::Error;

    fn try_from(value: MjonValue) -> crate::Result<Self> {
        match value {
            MjonValue::Bool(b) => Ok(b),
            other => Err(crate::Error::type_mismatch("boolean", other.type_name())),
        }
    }
}

impl TryFrom<MjonValue> for String {
    type Error = crate::Error;

    fn try_from(value: MjonValue) -> crate::Result<Self> {
        match value {
            MjonValue::String(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("string", other.type_name())),
        }
    }
}

impl From<bool> for MjonValue {
    fn from(value: bool) -> Self {
        MjonValue::Bool(value)
    }
}

impl From<i32> for MjonValue {
    fn from(value: i32) -> Self {
        MjonValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for MjonValue {
    fn from(value: i64) -> Self {
        MjonValue::Number(Number::Integer(value))
    }
}

impl From<u32> for MjonValue {
    fn from(value: u32) -> Self {
        MjonValue::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for MjonValue {
    fn from(value: f64) -> Self {
        MjonValue::Number(Number::Float(value))
    }
}

impl From<Number> for MjonValue {
    fn from(value: Number) -> Self {
        MjonValue::Number(value)
    }
}

impl From<String> for MjonValue {
    fn from(value: String) -> Self {
        MjonValue::String(value)
    }
}

impl From<&str> for MjonValue {
    fn from(value: &str) -> Self {
        MjonValue::String(value.to_string())
    }
}

impl From<Vec<MjonValue>> for MjonValue {
    fn from(value: Vec<MjonValue>) -> Self {
        MjonValue::Array(value)
    }
}

impl From<MjonMap> for MjonValue {
    fn from(value: MjonMap) -> Self {
        MjonValue::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_tryfrom_i64() {
        let value = MjonValue::Number(Number::Integer(42));
        assert_eq!(i64::try_from(value).unwrap(), 42);

        let value = MjonValue::Number(Number::Float(42.0));
        assert_eq!(i64::try_from(value).unwrap(), 42);

        let value = MjonValue::Number(Number::Float(0.5));
        assert!(i64::try_from(value).is_err());

        let err = i64::try_from(MjonValue::from("test")).unwrap_err();
        assert_eq!(err, crate::Error::type_mismatch("integer", "string"));
    }

    #[test]
    fn test_tryfrom_scalars() {
        assert_eq!(f64::try_from(MjonValue::from(42)).unwrap(), 42.0);
        assert!(bool::try_from(MjonValue::Bool(true)).unwrap());
        assert!(bool::try_from(MjonValue::from(1)).is_err());
        assert_eq!(String::try_from(MjonValue::from("hi")).unwrap(), "hi");
        assert!(String::try_from(MjonValue::from(42)).is_err());
    }

    #[test]
    fn test_float_display_keeps_fraction() {
        assert_eq!(Number::Float(1.0).to_string(), "1.0");
        assert_eq!(Number::Float(3.14).to_string(), "3.14");
        assert_eq!(Number::Float(-0.5).to_string(), "-0.5");
        assert_eq!(Number::Integer(-7).to_string(), "-7");
    }

    #[test]
    fn test_display_scalars_verbatim() {
        assert_eq!(MjonValue::from(true).to_string(), "true");
        assert_eq!(MjonValue::from("  spaced ").to_string(), "  spaced ");
    }

    #[test]
    fn test_display_container_is_document() {
        let mut map = MjonMap::new();
        map.insert(
            "tags".to_string(),
            MjonValue::Array(vec![MjonValue::from("a"), MjonValue::from("b")]),
        );
        assert_eq!(
            MjonValue::Object(map).to_string(),
            "@tags:\n  * a\n  * b"
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(MjonValue::from(1).type_name(), "integer");
        assert_eq!(MjonValue::from(1.5).type_name(), "float");
        assert_eq!(MjonValue::Array(vec![]).type_name(), "list");
        assert_eq!(MjonValue::Object(MjonMap::new()).type_name(), "mapping");
    }

    #[test]
    fn test_deserialize_from_json() {
        let value: MjonValue =
            serde_json::from_str(r#"{"a": [1, 2.5, "x"], "b": true}"#).unwrap();
        assert_eq!(
            value.get("a"),
            Some(&MjonValue::Array(vec![
                MjonValue::from(1),
                MjonValue::from(2.5),
                MjonValue::from("x"),
            ]))
        );
        assert_eq!(value.get("b"), Some(&MjonValue::Bool(true)));

        assert!(serde_json::from_str::<MjonValue>("null").is_err());
    }
}
