use serde_json::{Number, Value};

/// Raw input handed to the translation facade.
///
/// JSON values are coerced to text the way a browser's `String(value)` would, except
/// that `null` stays [`TranslationInput::Absent`]. The `Utf16` and `Bytes` forms carry
/// input that may not be well-formed so the segmenter can flag the broken parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationInput {
    Absent,
    Text(String),
    Utf16(Vec<u16>),
    Bytes(Vec<u8>),
}

impl TranslationInput {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => TranslationInput::Absent,
            other => TranslationInput::Text(coerce_to_string(other)),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, TranslationInput::Absent)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            TranslationInput::Absent => true,
            TranslationInput::Text(s) => s.is_empty(),
            TranslationInput::Utf16(units) => units.is_empty(),
            TranslationInput::Bytes(bytes) => bytes.is_empty(),
        }
    }
}

/// Host string coercion for JSON values
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(coerce_to_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// Integers up to 2^53 are exact in both representations
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

fn number_to_string(number: &Number) -> String {
    match number.as_i64() {
        Some(i) if i.unsigned_abs() <= MAX_SAFE_INTEGER => i.to_string(),
        _ => number.as_f64().map(js_number_to_string).unwrap_or_default(),
    }
}

/// Format a float the way JavaScript's `Number.prototype.toString` does:
/// plain decimal for exponents in `-7..21`, otherwise `1.5e+21` style.
fn js_number_to_string(value: f64) -> String {
    if value == 0.0 {
        // Covers -0
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Shortest round-trip digits, e.g. "1.2345e-7"
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
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
        let (head, tail) = digits.split_at(1);
        let sign = if n >= 1 { '+' } else { '-' };
        if tail.is_empty() {
            format!("{head}e{sign}{}", (n - 1).abs())
        } else {
            format!("{head}.{tail}e{sign}{}", (n - 1).abs())
        }
    };

    if value < 0.0 { format!("-{body}") } else { body }
}

impl From<&str> for TranslationInput {
    fn from(s: &str) -> Self {
        TranslationInput::Text(s.to_string())
    }
}

impl From<String> for TranslationInput {
    fn from(s: String) -> Self {
        TranslationInput::Text(s)
    }
}

impl From<Option<String>> for TranslationInput {
    fn from(s: Option<String>) -> Self {
        s.map_or(TranslationInput::Absent, TranslationInput::Text)
    }
}

impl From<&Value> for TranslationInput {
    fn from(value: &Value) -> Self {
        TranslationInput::from_json(value)
    }
}

impl From<Value> for TranslationInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => TranslationInput::Text(s),
            other => TranslationInput::from_json(&other),
        }
    }
}
