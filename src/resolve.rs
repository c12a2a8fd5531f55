//! Style resolution: from flags and overrides to an ordered fragment list.

use crate::props::Props;
use crate::style::{StyleFragment, Stylesheet, RESERVED_NAMES};

/// Style supplied directly by the caller rather than selected by a flag.
///
/// Overrides are always merged last, so they win over anything the
/// stylesheet contributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StyleOverride {
    #[default]
    None,
    One(StyleFragment),
    /// A list that may contain empty slots; empty slots are skipped.
    Many(Vec<Option<StyleFragment>>),
}

impl StyleOverride {
    /// Iterates over the present fragments, in order.
    pub fn fragments(&self) -> impl Iterator<Item = &StyleFragment> {
        let (one, many) = match self {
            StyleOverride::None => (None, &[][..]),
            StyleOverride::One(fragment) => (Some(fragment), &[][..]),
            StyleOverride::Many(list) => (None, list.as_slice()),
        };
        one.into_iter().chain(many.iter().flatten())
    }

    pub fn is_empty(&self) -> bool {
        self.fragments().next().is_none()
    }
}

impl From<StyleFragment> for StyleOverride {
    fn from(fragment: StyleFragment) -> Self {
        StyleOverride::One(fragment)
    }
}

impl From<Option<StyleFragment>> for StyleOverride {
    fn from(fragment: Option<StyleFragment>) -> Self {
        fragment.map_or(StyleOverride::None, StyleOverride::One)
    }
}

impl From<Vec<StyleFragment>> for StyleOverride {
    fn from(list: Vec<StyleFragment>) -> Self {
        StyleOverride::Many(list.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<StyleFragment>>> for StyleOverride {
    fn from(list: Vec<Option<StyleFragment>>) -> Self {
        StyleOverride::Many(list)
    }
}

/// Resolves the ordered list of fragments to merge.
///
/// The result is `[default, active flags in stylesheet order, overrides...]`.
/// A flag is active when `flags` has a truthy value under its name; keys in
/// `flags` that the stylesheet doesn't define are ignored. Nothing is copied
/// or modified: the list borrows from `sheet` and `overrides`.
///
/// # Example
///
/// ```rust
/// use docstyle::{resolve, Props, StyleFragment, StyleOverride, Stylesheet};
///
/// let sheet = Stylesheet::new()
///     .add("default", StyleFragment::new().set("color", "black"))
///     .add("bold", StyleFragment::new().set("fontWeight", "bold"))
///     .add("center", StyleFragment::new().set("textAlign", "center"));
/// let props = Props::new().flag("bold").set("center", false).set("title", "hi");
///
/// let list = resolve(&sheet, &props, &StyleOverride::None);
/// assert_eq!(list, vec![
///     &StyleFragment::new().set("color", "black"),
///     &StyleFragment::new().set("fontWeight", "bold"),
/// ]);
/// ```
pub fn resolve<'a>(
    sheet: &'a Stylesheet,
    flags: &Props,
    overrides: &'a StyleOverride,
) -> Vec<&'a StyleFragment> {
    let active = sheet
        .flags()
        .filter(|(name, _)| !RESERVED_NAMES.contains(name) && flags.is_truthy(name));

    let mut list = vec![sheet.default_fragment()];
    for (name, fragment) in active {
        log::trace!("flag '{}' active", name);
        list.push(fragment);
    }
    list.extend(overrides.fragments());
    list
}
