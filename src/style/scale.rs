//! Proportional scaling of style fragments.
//!
//! Only the properties in [`SCALABLE_PROPERTIES`] are multiplied. Everything
//! else, including numeric properties such as `borderWidth` or `flex`, is
//! copied unchanged. Scaling never modifies its input; it always builds new
//! fragments, since stylesheet entries are shared between renders.

use std::fmt;

use super::error::StyleError;
use super::fragment::StyleFragment;
use super::value::StyleValue;

/// Property names multiplied by the scale factor.
pub const SCALABLE_PROPERTIES: &[&str] = &[
    "fontSize",
    "padding",
    "paddingTop",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "margin",
    "marginTop",
    "marginBottom",
    "marginLeft",
    "marginRight",
    "borderRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "lineHeight",
];

/// Returns true if `property` is scaled.
pub fn is_scalable(property: &str) -> bool {
    SCALABLE_PROPERTIES.contains(&property)
}

/// A validated scale factor: positive and finite.
///
/// # Example
///
/// ```rust
/// use docstyle::ScaleFactor;
///
/// assert!(ScaleFactor::new(1.5).is_ok());
/// assert!(ScaleFactor::new(0.0).is_err());
/// assert!(ScaleFactor::new(f64::NAN).is_err());
/// assert!(ScaleFactor::default().is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// The unscaled factor, `1`.
    pub const IDENTITY: ScaleFactor = ScaleFactor(1.0);

    /// Validates `value` as a scale factor.
    pub fn new(value: f64) -> Result<Self, StyleError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(StyleError::InvalidScale { value })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn is_identity(self) -> bool {
        self.0 == 1.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<f64> for ScaleFactor {
    type Error = StyleError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns a copy of `fragment` with every scalable numeric property multiplied by `factor`.
///
/// # Errors
///
/// Returns [`StyleError::InvalidScale`] if `factor` is not positive and finite.
///
/// # Example
///
/// ```rust
/// use docstyle::{scale_fragment, StyleFragment};
///
/// let base = StyleFragment::new().set("fontSize", 12).set("borderWidth", 1);
/// let scaled = scale_fragment(&base, 2.0).unwrap();
///
/// assert_eq!(scaled.get("fontSize").and_then(|v| v.as_number()), Some(24.0));
/// assert_eq!(scaled.get("borderWidth").and_then(|v| v.as_number()), Some(1.0));
/// ```
pub fn scale_fragment(
    fragment: &StyleFragment,
    factor: f64,
) -> Result<StyleFragment, StyleError> {
    let factor = ScaleFactor::new(factor)?;
    Ok(scale_with(fragment, factor))
}

/// Scales a possibly sparse list of fragments.
///
/// Absent slots stay absent in the output, at the same position.
pub fn scale_fragments<'a, I>(
    fragments: I,
    factor: f64,
) -> Result<Vec<Option<StyleFragment>>, StyleError>
where
    I: IntoIterator<Item = Option<&'a StyleFragment>>,
{
    let factor = ScaleFactor::new(factor)?;
    Ok(fragments
        .into_iter()
        .map(|slot| slot.map(|fragment| scale_with(fragment, factor)))
        .collect())
}

pub(crate) fn scale_with(fragment: &StyleFragment, factor: ScaleFactor) -> StyleFragment {
    if factor.is_identity() {
        return fragment.clone();
    }
    fragment.map_values(|name, value| match value {
        StyleValue::Number(n) if is_scalable(name) => {
            StyleValue::Number(n * factor.get())
        }
        other => other.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(fragment: &StyleFragment, name: &str) -> Option<f64> {
        fragment.get(name).and_then(|v| v.as_number())
    }

    #[test]
    fn test_scale_factor_rejects_invalid() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                ScaleFactor::new(bad),
                Err(StyleError::InvalidScale { .. })
            ));
        }
    }

    #[test]
    fn test_scale_factor_try_from() {
        let factor = ScaleFactor::try_from(0.75).unwrap();
        assert_eq!(factor.get(), 0.75);
        assert_eq!(factor.to_string(), "0.75");
    }

    #[test]
    fn test_scales_font_size_not_border_width() {
        let base = StyleFragment::new().set("fontSize", 12).set("borderWidth", 1);
        let scaled = scale_fragment(&base, 2.0).unwrap();
        assert_eq!(
            scaled,
            StyleFragment::new().set("fontSize", 24).set("borderWidth", 1)
        );
    }

    #[test]
    fn test_scales_every_whitelisted_property() {
        let base: StyleFragment = SCALABLE_PROPERTIES
            .iter()
            .map(|name| (*name, 3))
            .collect();
        let scaled = scale_fragment(&base, 1.5).unwrap();
        for name in SCALABLE_PROPERTIES {
            assert_eq!(num(&scaled, name), Some(4.5), "{} not scaled", name);
        }
    }

    #[test]
    fn test_leaves_other_numbers_alone() {
        let base = StyleFragment::new()
            .set("flex", 1)
            .set("gap", 10)
            .set("borderWidth", 2)
            .set("paddingHorizontal", 20)
            .set("marginHorizontal", -20);
        let scaled = scale_fragment(&base, 3.0).unwrap();
        assert_eq!(scaled, base);
    }

    #[test]
    fn test_non_numeric_whitelisted_value_untouched() {
        let base = StyleFragment::new().set("borderRadius", "50%");
        let scaled = scale_fragment(&base, 2.0).unwrap();
        assert_eq!(scaled.get("borderRadius").and_then(|v| v.as_str()), Some("50%"));
    }

    #[test]
    fn test_negative_margins_scale() {
        let base = StyleFragment::new().set("margin", -20);
        let scaled = scale_fragment(&base, 0.5).unwrap();
        assert_eq!(num(&scaled, "margin"), Some(-10.0));
    }

    #[test]
    fn test_does_not_mutate_input() {
        let base = StyleFragment::new().set("fontSize", 12);
        let _ = scale_fragment(&base, 2.0).unwrap();
        assert_eq!(num(&base, "fontSize"), Some(12.0));
    }

    #[test]
    fn test_invalid_factor_errors() {
        let base = StyleFragment::new().set("fontSize", 12);
        assert_eq!(
            scale_fragment(&base, -1.0),
            Err(StyleError::InvalidScale { value: -1.0 })
        );
    }

    #[test]
    fn test_sparse_list_keeps_gaps() {
        let a = StyleFragment::new().set("padding", 5);
        let b = StyleFragment::new().set("color", "red");
        let scaled = scale_fragments([Some(&a), None, Some(&b)], 2.0).unwrap();

        assert_eq!(scaled.len(), 3);
        assert_eq!(scaled[0].as_ref().and_then(|f| num(f, "padding")), Some(10.0));
        assert!(scaled[1].is_none());
        assert_eq!(scaled[2].as_ref(), Some(&b));
    }

    #[test]
    fn test_list_invalid_factor_errors() {
        let a = StyleFragment::new();
        assert!(scale_fragments([Some(&a)], 0.0).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn fragment_strategy() -> impl Strategy<Value = StyleFragment> {
        let names = prop::sample::select(vec![
            "fontSize",
            "padding",
            "marginLeft",
            "borderTopLeftRadius",
            "lineHeight",
            "borderWidth",
            "flex",
            "gap",
            "width",
        ]);
        prop::collection::vec((names, -100i32..100), 0..8)
            .prop_map(|pairs| pairs.into_iter().collect())
    }

    proptest! {
        #[test]
        fn scaling_by_one_is_identity(fragment in fragment_strategy()) {
            let once = scale_fragment(&fragment, 1.0).unwrap();
            let twice = scale_fragment(&once, 1.0).unwrap();
            prop_assert_eq!(twice, fragment);
        }

        #[test]
        fn scaling_multiplies_only_whitelisted(
            fragment in fragment_strategy(),
            factor in 0.01f64..10.0,
        ) {
            let scaled = scale_fragment(&fragment, factor).unwrap();
            prop_assert_eq!(scaled.len(), fragment.len());

            for (name, value) in fragment.iter() {
                let n = value.as_number().unwrap();
                let out = scaled.get(name).and_then(|v| v.as_number()).unwrap();
                if is_scalable(name) {
                    prop_assert_eq!(out, n * factor);
                } else {
                    prop_assert_eq!(out, n);
                }
            }
        }
    }
}
