//! Prop bags and flag partitioning.
//!
//! Elements receive an open-ended bag of props. Keys that name a flag in the
//! active [`Stylesheet`] select style fragments; everything else is forwarded
//! untouched to the render primitive. [`partition`] performs that split and is
//! run on every render, because the active stylesheet can change between
//! calls.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::style::{StyleError, Stylesheet, RESERVED_NAMES};

/// Names that elements take only as named parameters.
///
/// `numberOfLines` and `breakWord` are absent: they are primitive props too,
/// so they may be forwarded from the bag.
pub const PARAMETER_PROPS: &[&str] = &["stylesheet", "style", "scale", "children"];

/// An unordered bag of element props.
///
/// Values are JSON values so that arbitrary primitive props (ids, links,
/// booleans like `wrap`, numbers like `minPresenceAhead`) can be forwarded
/// without this crate knowing their types.
///
/// # Example
///
/// ```rust
/// use docstyle::Props;
///
/// let props = Props::new().flag("bold").set("center", false).set("title", "hi");
///
/// assert!(props.is_truthy("bold"));
/// assert!(!props.is_truthy("center"));
/// assert!(!props.is_truthy("missing"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Props {
    values: IndexMap<String, Value>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bag with `name` set to `value`.
    pub fn set<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the bag with flag `name` switched on.
    pub fn flag(self, name: &str) -> Self {
        self.set(name, true)
    }

    /// Sets `name` to `value` in place.
    pub fn insert<V: Into<Value>>(&mut self, name: &str, value: V) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns true if `name` is present with a truthy value.
    pub fn is_truthy(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(is_truthy)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Truthiness of a prop value.
///
/// `null`, `false`, `0`, `NaN` and the empty string are falsy; everything
/// else, including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Props split into style flags and pass-through props.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitioned {
    /// Props whose key is a flag of the stylesheet, with their values.
    pub style_flags: Props,
    /// Everything else, to be forwarded to the render primitive.
    pub pass_through: Props,
}

/// Splits `props` by whether each key is a flag in `sheet`.
///
/// Every key lands in exactly one side. The `default` entry and the
/// [reserved parameter names](crate::RESERVED_NAMES) are never flags.
///
/// # Example
///
/// ```rust
/// use docstyle::{partition, Props, StyleFragment, Stylesheet};
///
/// let sheet = Stylesheet::new()
///     .add("default", StyleFragment::new())
///     .add("bold", StyleFragment::new().set("fontWeight", "bold"));
/// let props = Props::new().flag("bold").set("title", "hi");
///
/// let split = partition(&props, &sheet);
/// assert!(split.style_flags.has("bold"));
/// assert!(split.pass_through.has("title"));
/// ```
pub fn partition(props: &Props, sheet: &Stylesheet) -> Partitioned {
    let mut split = Partitioned::default();
    for (name, value) in &props.values {
        let target = if is_flag_name(name, sheet) {
            &mut split.style_flags
        } else {
            &mut split.pass_through
        };
        target.values.insert(name.clone(), value.clone());
    }
    split
}

/// Rejects a bag that carries one of the [`PARAMETER_PROPS`].
///
/// Such a prop would otherwise be forwarded to the render primitive while
/// the element's own parameter of the same name is ignored.
pub fn check_parameter_props(props: &Props) -> Result<(), StyleError> {
    match props.keys().find(|name| PARAMETER_PROPS.contains(name)) {
        Some(name) => Err(StyleError::ReservedProp {
            name: name.to_string(),
        }),
        None => Ok(()),
    }
}

fn is_flag_name(name: &str, sheet: &Stylesheet) -> bool {
    sheet.is_flag(name) && !RESERVED_NAMES.contains(&name)
}
