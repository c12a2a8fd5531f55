//! Style fragments: immutable property maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::StyleValue;

/// A set of style properties, keyed by the render primitive's property names.
///
/// Fragments are value objects: the builder methods consume and return a
/// fragment, and nothing in this crate modifies a fragment after it has been
/// placed in a [`Stylesheet`](crate::Stylesheet). Scaling and merging always
/// produce new fragments.
///
/// # Example
///
/// ```rust
/// use docstyle::StyleFragment;
///
/// let chip = StyleFragment::new()
///     .set("padding", 5)
///     .set("color", "white")
///     .set("borderRadius", 8);
///
/// assert_eq!(chip.len(), 3);
/// assert_eq!(chip.get("padding").and_then(|v| v.as_number()), Some(5.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleFragment {
    properties: IndexMap<String, StyleValue>,
}

impl StyleFragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fragment with `name` set to `value`, replacing any previous value.
    pub fn set<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    /// Returns the value of a property.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.properties.get(name)
    }

    /// Returns true if the property is present.
    pub fn has(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Iterates over properties in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns a new fragment produced by applying `f` to every property.
    pub(crate) fn map_values<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str, &StyleValue) -> StyleValue,
    {
        Self {
            properties: self
                .properties
                .iter()
                .map(|(k, v)| (k.clone(), f(k, v)))
                .collect(),
        }
    }

    /// Folds a list of fragments into one. Later fragments win conflicts.
    ///
    /// This is the merge the render primitive performs on a style list; it is
    /// exposed for renderers that only accept a single style object.
    ///
    /// ```rust
    /// use docstyle::StyleFragment;
    ///
    /// let base = StyleFragment::new().set("color", "black").set("fontSize", 12);
    /// let error = StyleFragment::new().set("color", "red");
    ///
    /// let merged = StyleFragment::merge([&base, &error]);
    /// assert_eq!(merged.get("color").and_then(|v| v.as_str()), Some("red"));
    /// assert_eq!(merged.get("fontSize").and_then(|v| v.as_number()), Some(12.0));
    /// ```
    pub fn merge<'a, I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = &'a StyleFragment>,
    {
        let mut merged = IndexMap::new();
        for fragment in fragments {
            for (k, v) in &fragment.properties {
                merged.insert(k.clone(), v.clone());
            }
        }
        Self { properties: merged }
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleFragment {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_existing_value() {
        let fragment = StyleFragment::new()
            .set("color", "black")
            .set("color", "grey");
        assert_eq!(fragment.len(), 1);
        assert_eq!(fragment.get("color"), Some(&StyleValue::from("grey")));
    }

    #[test]
    fn test_iter_keeps_definition_order() {
        let fragment = StyleFragment::new()
            .set("flex", 1)
            .set("padding", 10)
            .set("borderColor", "grey");
        let keys: Vec<&str> = fragment.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["flex", "padding", "borderColor"]);
    }

    #[test]
    fn test_merge_later_wins() {
        let a = StyleFragment::new().set("color", "black").set("fontSize", 12);
        let b = StyleFragment::new().set("fontSize", 16);
        let c = StyleFragment::new().set("color", "blue");

        let merged = StyleFragment::merge([&a, &b, &c]);
        assert_eq!(merged.get("color"), Some(&StyleValue::from("blue")));
        assert_eq!(merged.get("fontSize"), Some(&StyleValue::from(16)));
    }

    #[test]
    fn test_merge_does_not_touch_inputs() {
        let a = StyleFragment::new().set("color", "black");
        let b = StyleFragment::new().set("color", "red");
        let _ = StyleFragment::merge([&a, &b]);
        assert_eq!(a.get("color"), Some(&StyleValue::from("black")));
    }

    #[test]
    fn test_merge_empty() {
        assert!(StyleFragment::merge(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_from_iter() {
        let fragment: StyleFragment = vec![("margin", 1), ("padding", 2)]
            .into_iter()
            .collect();
        assert!(fragment.has("margin"));
        assert!(fragment.has("padding"));
    }

    #[test]
    fn test_serde_transparent() {
        let fragment = StyleFragment::new()
            .set("textAlign", "center")
            .set("fontSize", 14);
        let json = serde_json::to_string(&fragment).unwrap();
        assert_eq!(json, r#"{"textAlign":"center","fontSize":14.0}"#);

        let back: StyleFragment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fragment);
    }
}
