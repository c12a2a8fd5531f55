//! Style system for named style fragments and scaling.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleValue`]: A numeric or string property value
//! - [`StyleFragment`]: An immutable map of property values
//! - [`Stylesheet`]: An ordered dictionary of fragments keyed by flag name
//! - [`ScaleFactor`] and [`scale_fragment`]: Proportional resizing of fragments
//! - [`StyleError`]: Errors from validation and scaling
//!
//! Every stylesheet has a `default` entry that is always applied, followed by
//! whichever flags the caller switched on, in the stylesheet's own order.

mod builtin;
mod error;
mod fragment;
mod scale;
mod stylesheet;
mod value;

pub use builtin::{text_styles, view_styles};
pub use error::StyleError;
pub use fragment::StyleFragment;
pub(crate) use scale::scale_with;
pub use scale::{
    is_scalable, scale_fragment, scale_fragments, ScaleFactor, SCALABLE_PROPERTIES,
};
pub use stylesheet::{Stylesheet, DEFAULT_STYLE, RESERVED_NAMES};
pub use value::StyleValue;
