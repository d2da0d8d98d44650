use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Primary key value of a model instance.
///
/// Search engines hand identifiers back as strings, even when the indexed
/// model uses integer keys. `Key::coerce` recovers the integer form for any
/// numeric-looking identifier so keys compare equal across both shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    String(String),
}

impl Key {
    /// Coerces a raw identifier value.
    ///
    /// Integers are kept, floats are truncated, numeric strings (surrounding
    /// whitespace allowed, integer, decimal or exponent notation) become
    /// integers and any other string is kept verbatim. Returns `None` for
    /// values that cannot identify a record (`null`, booleans, arrays and
    /// objects).
    pub fn coerce(value: &Value) -> Option<Key> {
        match value {
            Value::Number(number) => Some(match number.as_i64() {
                Some(int) => Key::Int(int),
                None => match number.as_u64() {
                    // Above i64::MAX; keep the digits rather than saturate.
                    Some(big) => Key::String(big.to_string()),
                    None => Key::Int(number.as_f64().map(truncate).unwrap_or_default()),
                },
            }),
            Value::String(s) => Some(Key::from_str_lossy(s)),
            _ => None,
        }
    }

    fn from_str_lossy(s: &str) -> Key {
        let trimmed = s.trim();

        if let Ok(int) = trimmed.parse::<i64>() {
            return Key::Int(int);
        }

        // `f64::from_str` also accepts "inf" and "nan", which are not numeric
        // identifiers.
        if is_decimal_literal(trimmed) {
            if let Ok(float) = trimmed.parse::<f64>() {
                if float.is_finite() {
                    return Key::Int(truncate(float));
                }
            }
        }

        Key::String(s.to_string())
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(int) => Some(*int),
            Key::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::String(s) => Some(s),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Key::Int(int) => Value::from(*int),
            Key::String(s) => Value::from(s.as_str()),
        }
    }
}

fn truncate(float: f64) -> i64 {
    // `as` saturates at the i64 bounds.
    float.trunc() as i64
}

fn is_decimal_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty()
        && digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(int) => write!(f, "{int}"),
            Key::String(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::String(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::String(value)
    }
}
