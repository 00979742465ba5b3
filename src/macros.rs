/// Builds a [`MjonValue`](crate::MjonValue) from a JSON-like literal.
///
/// Objects keep the order their keys are written in. Leaves go through
/// `MjonValue::from`, so any type with a `From` impl works, including
/// variables wrapped in parentheses.
///
/// ```rust
/// use serde_mjon::{mjon, MjonValue};
///
/// let limit = 10;
/// let value = mjon!({
///     "name": "Alice",
///     "limit": (limit),
///     "tags": ["a", "b"],
///     "meta": { "active": true }
/// });
/// assert_eq!(value.get("limit"), Some(&MjonValue::from(10)));
/// ```
#[macro_export]
macro_rules! mjon {
    (true) => {
        $crate::MjonValue::Bool(true)
    };

    (false) => {
        $crate::MjonValue::Bool(false)
    };

    ([]) => {
        $crate::MjonValue::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::MjonValue::Array(vec![$($crate::mjon!($elem)),*])
    };

    ({}) => {
        $crate::MjonValue::Object($crate::MjonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::MjonMap::new();
        $(
            object.insert($key.to_string(), $crate::mjon!($value));
        )*
        $crate::MjonValue::Object(object)
    }};

    ($other:expr) => {
        $crate::MjonValue::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{MjonMap, MjonValue, Number};

    #[test]
    fn test_mjon_macro_scalars() {
        assert_eq!(mjon!(true), MjonValue::Bool(true));
        assert_eq!(mjon!(false), MjonValue::Bool(false));
        assert_eq!(mjon!(42), MjonValue::Number(Number::Integer(42)));
        assert_eq!(mjon!(3.5), MjonValue::Number(Number::Float(3.5)));
        assert_eq!(mjon!("hello"), MjonValue::String("hello".to_string()));
    }

    #[test]
    fn test_mjon_macro_arrays() {
        assert_eq!(mjon!([]), MjonValue::Array(vec![]));
        assert_eq!(
            mjon!([1, "two", [true]]),
            MjonValue::Array(vec![
                MjonValue::from(1),
                MjonValue::from("two"),
                MjonValue::Array(vec![MjonValue::Bool(true)]),
            ])
        );
    }

    #[test]
    fn test_mjon_macro_objects_keep_order() {
        assert_eq!(mjon!({}), MjonValue::Object(MjonMap::new()));

        let obj = mjon!({ "b": 1, "a": 2 });
        let keys: Vec<_> = obj.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
