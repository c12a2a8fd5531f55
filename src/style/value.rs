//! Style property values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single style property value.
///
/// The engine only distinguishes numbers (which may be scaled) from
/// everything else. Colors, keywords and percentages are all strings and
/// are interpreted by the render primitive.
///
/// # Example
///
/// ```rust
/// use docstyle::StyleValue;
///
/// let size: StyleValue = 12.into();
/// let color: StyleValue = "black".into();
///
/// assert_eq!(size.as_number(), Some(12.0));
/// assert_eq!(color.as_number(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A numeric value, e.g. `fontSize: 12` or `flex: 1`.
    Number(f64),
    /// Any non-numeric value, e.g. `color: "grey"` or `width: "100%"`.
    Text(String),
}

impl StyleValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(_) => None,
        }
    }

    /// Returns the string value, if this is not a number.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Number(_) => None,
            StyleValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}
