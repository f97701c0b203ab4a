//! Text forms of JSON values as they appear in sheet cells.
//!
//! Numbers follow ECMAScript `Number#toString`: the shortest round-trip
//! digits, no trailing `.0` on integral values, and exponent notation only
//! below `1e-6` or from `1e21` upwards.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::{Number, Value};

/// Integers above this magnitude lose precision as ECMAScript numbers.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Plain cell text of a present value, as ECMAScript `String(value)` gives
/// it: strings verbatim, scalars in literal form, arrays joined with `,`
/// (null elements empty) and objects as `[object Object]`.
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(plain_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Compact JSON encoding with ECMAScript number text, e.g. `[0.1,0.2]`.
pub fn json_text(value: &Value) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, JsNumberFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}

struct JsNumberFormatter;

impl Formatter for JsNumberFormatter {
    fn write_i64<W>(&mut self, writer: &mut W, value: i64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(integer_text(value.unsigned_abs(), value < 0).as_bytes())
    }

    fn write_u64<W>(&mut self, writer: &mut W, value: u64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(integer_text(value, false).as_bytes())
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(float_text(value).as_bytes())
    }
}

pub fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return integer_text(i.unsigned_abs(), i < 0);
    }
    if let Some(u) = n.as_u64() {
        return integer_text(u, false);
    }
    match n.as_f64() {
        Some(f) => float_text(f),
        None => n.to_string(),
    }
}

fn integer_text(magnitude: u64, negative: bool) -> String {
    if magnitude > MAX_SAFE_INTEGER {
        let f = magnitude as f64;
        return float_text(if negative { -f } else { f });
    }
    if negative {
        format!("-{magnitude}")
    } else {
        magnitude.to_string()
    }
}

fn float_text(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if !f.is_finite() {
        return "null".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.25e-7"
    let sci = format!("{:e}", f.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exponent + 1;
    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", (n - 1).abs())
        } else {
            format!("{first}.{rest}e{sign}{}", (n - 1).abs())
        }
    };

    if f.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_float_text_matches_js_number_to_string() {
        let cases = [
            (1.0, "1"),
            (0.1, "0.1"),
            (-2.5, "-2.5"),
            (123456.789, "123456.789"),
            (0.000001, "0.000001"),
            (1.2e-7, "1.2e-7"),
            (1e21, "1e+21"),
            (1.5e300, "1.5e+300"),
            (100.0, "100"),
            (-0.0, "0"),
            (0.30000000000000004, "0.30000000000000004"),
        ];
        for (input, expected) in cases {
            assert_eq!(float_text(input), expected, "formatting {input:e}");
        }
    }

    #[test]
    fn test_json_text_is_compact() {
        assert_eq!(json_text(&json!([0.1, 0.2])).unwrap(), "[0.1,0.2]");
        assert_eq!(json_text(&json!([1.0, -3, null])).unwrap(), "[1,-3,null]");
        assert_eq!(json_text(&json!([1.2e-7, 1e21])).unwrap(), "[1.2e-7,1e+21]");
        assert_eq!(json_text(&Value::Null).unwrap(), "null");
        assert_eq!(
            json_text(&json!({"a": "x\"y", "b": [true]})).unwrap(),
            r#"{"a":"x\"y","b":[true]}"#
        );
    }

    #[test]
    fn test_unsafe_integers_lose_precision_like_js() {
        let big: Value = serde_json::from_str("9007199254740993").unwrap();
        assert_eq!(plain_text(&big), "9007199254740992");
        let small: Value = serde_json::from_str("-9007199254740993").unwrap();
        assert_eq!(plain_text(&small), "-9007199254740992");
        assert_eq!(plain_text(&json!(9007199254740991u64)), "9007199254740991");
        assert_eq!(
            json_text(&serde_json::from_str("[18446744073709551615]").unwrap()).unwrap(),
            "[18446744073709552000]"
        );
    }

    #[test]
    fn test_plain_text_joins_arrays_like_js() {
        assert_eq!(plain_text(&json!(["a", 1])), "a,1");
        assert_eq!(plain_text(&json!(["a", 1, null])), "a,1,");
        assert_eq!(plain_text(&json!([[1, 2], [3]])), "1,2,3");
        assert_eq!(plain_text(&json!([])), "");
        assert_eq!(plain_text(&json!({"k": 1})), "[object Object]");
        assert_eq!(plain_text(&json!([{"k": 1}, true])), "[object Object],true");
    }

    #[test]
    fn test_plain_text_does_not_quote_scalars() {
        assert_eq!(plain_text(&json!("hello")), "hello");
        assert_eq!(plain_text(&json!(42)), "42");
        assert_eq!(plain_text(&json!(2.0)), "2");
        assert_eq!(plain_text(&json!(false)), "false");
    }
}
