use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar that was stored either as a JSON number or as a string.
///
/// Weight and rep fields come back from the store in both shapes
/// depending on how they were entered, so every consumer goes through
/// the total parse functions here instead of assuming a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Integer view of the value. `None` when the text does not parse
    /// as an integer or the value is missing/empty.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Number(n) if n.fract() == 0.0 => Some(*n as i64),
            Scalar::Number(_) => None,
            Scalar::Text(t) => t.trim().parse::<i64>().ok(),
        }
    }

    /// Float view of the value, for measurement-style fields.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(t) => t.trim().parse::<f64>().ok(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Text(t) if t.trim().is_empty())
    }
}

impl Default for Scalar {
    fn default() -> Self {
        // Untouched form fields are stored as empty strings.
        Scalar::Text(String::new())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(t) => write!(f, "{}", t),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// Deserialize a numeric field that may arrive as a number, a numeric
/// string, or an empty string; anything unparseable becomes 0.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_f64()).unwrap_or(0.0))
}
