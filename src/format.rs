//! Text rendering of leaf values for XML content.

use crate::{Number, Value};

/// Renders a leaf value as XML text content.
///
/// | value | text |
/// |-------|------|
/// | boolean | `true` / `false` |
/// | float | shortest round-trippable digits, see [`fmt_float`] |
/// | literal number | its own text |
/// | string | itself |
/// | array | elements rendered recursively, joined by `array_separator` |
/// | null, object | empty string |
///
/// # Examples
///
/// ```rust
/// use serde_flat::{format::fmt_string, value};
///
/// assert_eq!(fmt_string(&value!(["4", "2"]), "|"), "4|2");
/// assert_eq!(fmt_string(&value!(3.14), "|"), "3.14");
/// assert_eq!(fmt_string(&value!(null), "|"), "");
/// ```
#[must_use]
pub fn fmt_string(value: &Value, array_separator: &str) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|v| fmt_string(v, array_separator))
            .collect::<Vec<_>>()
            .join(array_separator),
        Value::Bool(b) => b.to_string(),
        Value::Number(Number::Float(f)) => fmt_float(*f),
        Value::Number(Number::Literal(s)) => s.clone(),
        Value::String(s) => s.clone(),
        Value::Null | Value::Object(_) => String::new(),
    }
}

/// Exponents below this switch to scientific notation.
const MIN_FIXED_EXPONENT: i32 = -4;
/// Exponents at or above this switch to scientific notation.
const MAX_FIXED_EXPONENT: i32 = 6;

/// Renders a float with the fewest digits that parse back to the same value.
///
/// Decimal exponents outside `-4..6` use scientific notation with a signed,
/// two-digit exponent. Non-finite values render as `NaN`, `+Inf` and `-Inf`.
///
/// # Examples
///
/// ```rust
/// use serde_flat::format::fmt_float;
///
/// assert_eq!(fmt_float(3.14), "3.14");
/// assert_eq!(fmt_float(100000.0), "100000");
/// assert_eq!(fmt_float(1234567.0), "1.234567e+06");
/// assert_eq!(fmt_float(1e300), "1e+300");
/// assert_eq!(fmt_float(0.00001), "1e-05");
/// ```
#[must_use]
pub fn fmt_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let scientific = format!("{:e}", f);
    let exponent = scientific
        .split_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
        .unwrap_or(0);
    if (MIN_FIXED_EXPONENT..MAX_FIXED_EXPONENT).contains(&exponent) {
        return f.to_string();
    }

    let mantissa = scientific.split('e').next().unwrap_or(&scientific);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
}
