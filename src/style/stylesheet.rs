//! Stylesheets: ordered dictionaries of named style fragments.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use super::error::StyleError;
use super::fragment::StyleFragment;

/// Name of the entry that is always applied first.
pub const DEFAULT_STYLE: &str = "default";

/// Parameter names that element wrappers take explicitly.
///
/// A stylesheet may not define flags with these names; [`Stylesheet::validate`]
/// rejects them so a flag can never be shadowed by a named parameter.
pub const RESERVED_NAMES: &[&str] = &[
    "stylesheet",
    "style",
    "scale",
    "breakWord",
    "numberOfLines",
    "children",
];

static EMPTY_FRAGMENT: Lazy<StyleFragment> = Lazy::new(StyleFragment::new);

/// A named, ordered collection of style fragments.
///
/// The `default` entry is applied unconditionally; every other entry is a
/// flag that callers switch on with a truthy prop of the same name. Entries
/// keep their definition order, which is the order flags are merged in, so
/// when two active flags set the same property the later-defined one wins.
///
/// # Example
///
/// ```rust
/// use docstyle::{StyleFragment, Stylesheet};
///
/// let sheet = Stylesheet::new()
///     .add("default", StyleFragment::new().set("color", "black"))
///     .add("bold", StyleFragment::new().set("fontWeight", "bold"))
///     .add("center", StyleFragment::new().set("textAlign", "center"));
///
/// assert!(sheet.has("bold"));
/// assert_eq!(sheet.flags().map(|(name, _)| name).collect::<Vec<_>>(), vec!["bold", "center"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    entries: IndexMap<String, StyleFragment>,
}

impl Stylesheet {
    /// Creates an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named fragment, returning the updated stylesheet for chaining.
    ///
    /// Re-adding an existing name replaces its fragment but keeps its
    /// original position.
    pub fn add(mut self, name: &str, fragment: StyleFragment) -> Self {
        self.entries.insert(name.to_string(), fragment);
        self
    }

    /// Returns true if the stylesheet has an entry with this name.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns true if `name` is a flag in this stylesheet (an entry other than `default`).
    pub fn is_flag(&self, name: &str) -> bool {
        name != DEFAULT_STYLE && self.has(name)
    }

    pub fn get(&self, name: &str) -> Option<&StyleFragment> {
        self.entries.get(name)
    }

    /// Returns the `default` fragment.
    ///
    /// A stylesheet without one behaves as if it had an empty default, so
    /// partial stylesheets stay usable.
    pub fn default_fragment(&self) -> &StyleFragment {
        self.entries.get(DEFAULT_STYLE).unwrap_or(&*EMPTY_FRAGMENT)
    }

    /// Iterates over flag entries (everything except `default`) in definition order.
    pub fn flags(&self) -> impl Iterator<Item = (&str, &StyleFragment)> {
        self.entries
            .iter()
            .filter(|(name, _)| name.as_str() != DEFAULT_STYLE)
            .map(|(name, fragment)| (name.as_str(), fragment))
    }

    /// Number of entries, including `default` if present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that no flag collides with a reserved parameter name.
    pub fn validate(&self) -> Result<(), StyleError> {
        match self
            .entries
            .keys()
            .find(|name| RESERVED_NAMES.contains(&name.as_str()))
        {
            Some(name) => Err(StyleError::ReservedFlag { name: name.clone() }),
            None => Ok(()),
        }
    }

    /// Parses a stylesheet from YAML.
    ///
    /// The document must be a mapping of entry names to property mappings.
    /// Entry order in the document becomes flag order. The result is
    /// validated before it is returned.
    ///
    /// ```rust
    /// use docstyle::Stylesheet;
    ///
    /// let sheet = Stylesheet::from_yaml(r#"
    /// default:
    ///   fontSize: 12
    /// error:
    ///   color: red
    /// "#).unwrap();
    ///
    /// assert!(sheet.is_flag("error"));
    /// assert!(!sheet.is_flag("default"));
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        if source.trim().is_empty() {
            return Ok(Self::new());
        }
        let entries: Option<IndexMap<String, Option<StyleFragment>>> =
            serde_yaml::from_str(source)?;
        let sheet = Self {
            entries: entries
                .unwrap_or_default()
                .into_iter()
                .map(|(name, fragment)| (name, fragment.unwrap_or_default()))
                .collect(),
        };
        sheet.validate()?;
        log::trace!("loaded stylesheet with {} entries", sheet.len());
        Ok(sheet)
    }
}
