//! Lenient conversions from a dynamic [`Value`] to Rust primitives.
//!
//! Every conversion accepts the value's native shape and, where it makes
//! sense, its textual forms: a boolean may be given as `"true"`, a float or
//! an integer as a string or as a literal number. Anything else fails with
//! [`Error::TypeMismatch`]. When a string is accepted but cannot be parsed,
//! the parser's own error is returned unchanged.
//!
//! The same rules back the typed getters of [`Document`](crate::Document)
//! and the `TryFrom<&Value>` impls below.
//!
//! ```rust
//! use serde_flat::{Number, Value};
//!
//! let literal = Value::Number(Number::Literal("42".to_string()));
//! assert_eq!(i64::try_from(&literal).unwrap(), 42);
//! assert_eq!(String::try_from(&literal).unwrap(), "42");
//! assert!(String::try_from(&Value::Bool(true)).is_err());
//! ```

use crate::{Error, Number, Result, Value};
use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;

fn mismatch<T>(expected: &'static str, found: &Value) -> Result<T> {
    Err(Error::type_mismatch(expected, found.type_name()))
}

/// Parses the boolean literal family: `1 t T TRUE true True` and
/// `0 f F FALSE false False`.
fn parse_bool(input: &str) -> Result<bool> {
    match input {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Error::ParseBool {
            input: input.to_string(),
        }),
    }
}

pub(crate) fn to_bool(value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => parse_bool(s),
        other => mismatch("bool", other),
    }
}

pub(crate) fn to_f64(value: &Value) -> Result<f64> {
    match value {
        Value::Number(Number::Float(f)) => Ok(*f),
        Value::Number(Number::Literal(s)) | Value::String(s) => Ok(s.parse()?),
        other => mismatch("f64", other),
    }
}

pub(crate) fn to_i64(value: &Value) -> Result<i64> {
    match value {
        // Truncates toward zero and saturates at the type bounds.
        Value::Number(Number::Float(f)) => Ok(*f as i64),
        Value::Number(Number::Literal(s)) | Value::String(s) => Ok(s.parse()?),
        other => mismatch("i64", other),
    }
}

pub(crate) fn to_u64(value: &Value) -> Result<u64> {
    match value {
        Value::Number(Number::Float(f)) => Ok(*f as u64),
        Value::Number(Number::Literal(s)) | Value::String(s) => Ok(s.parse()?),
        other => mismatch("u64", other),
    }
}

pub(crate) fn to_big_int(value: &Value) -> Result<BigInt> {
    match value {
        Value::Number(Number::Float(f)) if f.is_finite() => Ok(format!("{:.0}", f.trunc()).parse()?),
        Value::Number(Number::Literal(s)) | Value::String(s) => Ok(s.parse()?),
        other => mismatch("big integer", other),
    }
}

/// Strings and literal numbers convert; booleans and floats do not.
pub(crate) fn to_string(value: &Value) -> Result<String> {
    match value {
        Value::String(s) | Value::Number(Number::Literal(s)) => Ok(s.clone()),
        other => mismatch("string", other),
    }
}

/// Converts every element of an array with [`to_string`], failing on the
/// first element that does not convert.
pub(crate) fn to_strings(value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Array(items) => items.iter().map(to_string).collect(),
        other => mismatch("array of strings", other),
    }
}

/// Parses a string-coercible value against a `strftime`-style layout.
///
/// Fields the layout leaves out take their zero value: year 0, January, the
/// first day of the month, hour 0 and minute 0. A 12-hour clock without an
/// AM/PM marker reads as AM. A parsed offset is applied before converting to
/// UTC; without one the value is read as UTC. Out of range fields, such as
/// February 30, are errors.
pub(crate) fn to_time(value: &Value, layout: &str) -> Result<DateTime<Utc>> {
    let text = to_string(value)?;
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, &text, StrftimeItems::new(layout))?;

    let date = match parsed.to_naive_date() {
        Ok(date) => date,
        Err(_) => {
            default_date_fields(&mut parsed)?;
            parsed.to_naive_date()?
        }
    };
    default_time_fields(&mut parsed)?;
    let naive = date.and_time(parsed.to_naive_time()?);

    let utc = match parsed.to_fixed_offset() {
        Ok(offset) => match naive.and_local_timezone(offset).single() {
            Some(local) => local.with_timezone(&Utc),
            None => naive.and_utc(),
        },
        Err(_) => naive.and_utc(),
    };
    Ok(utc)
}

fn default_date_fields(parsed: &mut Parsed) -> Result<()> {
    if parsed.year().is_none() && parsed.year_div_100().is_none() && parsed.year_mod_100().is_none()
    {
        parsed.set_year(0)?;
    }
    if parsed.month().is_none() {
        parsed.set_month(1)?;
    }
    if parsed.day().is_none() {
        parsed.set_day(1)?;
    }
    Ok(())
}

fn default_time_fields(parsed: &mut Parsed) -> Result<()> {
    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        (None, Some(_)) => parsed.set_ampm(false)?,
        _ => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    Ok(())
}

impl TryFrom<&Value> for bool {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        to_bool(value)
    }
}

impl TryFrom<&Value> for f64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        to_f64(value)
    }
}

impl TryFrom<&Value> for i64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        to_i64(value)
    }
}

impl TryFrom<&Value> for u64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        to_u64(value)
    }
}

impl TryFrom<&Value> for BigInt {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        to_big_int(value)
    }
}

impl TryFrom<&Value> for String {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        to_string(value)
    }
}

impl TryFrom<&Value> for Vec<String> {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        to_strings(value)
    }
}
