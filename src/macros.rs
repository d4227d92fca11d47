/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use serde_flat::{value, Value};
///
/// let doc = value!({
///     "object": { "a": "b", "c": "d" },
///     "array": [1, 2, 3],
///     "enabled": true
/// });
/// assert!(doc.is_object());
/// ```
///
/// Anything that is not `null`, `true`, `false`, an array or an object goes
/// through [`to_value`](crate::to_value); expressions that fail to serialize
/// become `Value::Null`.
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
