//! # docstyle - Flag-driven styles for document elements
//!
//! `docstyle` turns named boolean flags into style lists for a paginated
//! document renderer. Callers write `bold`, `center` or `redBg` instead of
//! spelling out properties; the engine resolves those flags against a
//! stylesheet in a fixed order, forwards every other prop untouched, and
//! scales proportional properties so whole trees can be resized at once.
//!
//! ## Core Concepts
//!
//! - [`Stylesheet`]: Ordered dictionary of [`StyleFragment`]s with a `default` entry
//! - [`resolve`]: `[default, active flags in sheet order, overrides]`
//! - [`partition`]: Splits props into style flags and pass-through props
//! - [`scale_fragment`]: Multiplies the [`SCALABLE_PROPERTIES`] by a factor
//! - [`RenderContext`]: Scale, nest depth, debug flag and view stylesheet for a subtree
//! - [`element`]: [`StyledText`], [`StyledView`] and friends, rendering to [`Node`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use docstyle::{Element, Provider, RenderContext, StyledText, StyledView};
//!
//! let card = Provider::new().scale(1.5).child(
//!     StyledView::new()
//!         .flag("card")
//!         .child(StyledText::text("Invoice").flag("m").flag("bold"))
//!         .child(StyledText::text("Due in 30 days").flag("gray")),
//! );
//!
//! let tree = card.render(&RenderContext::new()).unwrap().unwrap();
//! let view = &tree.children()[0];
//! let title = &view.children()[0];
//!
//! // 24pt heading scaled by 1.5
//! assert_eq!(title.merged_style().get("fontSize").and_then(|v| v.as_number()), Some(36.0));
//! // JSON for the render primitive
//! assert!(tree.to_json().unwrap().contains("\"type\":\"view\""));
//! ```
//!
//! ## Stylesheets
//!
//! Flags are matched against a stylesheet: the built-in [`text_styles`] and
//! [`view_styles`], one built in code, or one loaded from YAML:
//!
//! ```rust
//! use std::sync::Arc;
//! use docstyle::{Element, RenderContext, StyledText, Stylesheet};
//!
//! let sheet = Stylesheet::from_yaml(r#"
//! default:
//!   fontSize: 10
//! warning:
//!   color: orange
//! "#).unwrap();
//!
//! let node = StyledText::text("Careful")
//!     .stylesheet(Arc::new(sheet))
//!     .flag("warning")
//!     .prop("id", "w1")
//!     .render(&RenderContext::new())
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(node.style().len(), 2);
//! assert!(node.props().unwrap().has("id"));
//! ```
//!
//! Flag names may not collide with the parameters elements take explicitly
//! (see [`RESERVED_NAMES`]); such stylesheets fail validation.

pub mod context;
pub mod element;
pub mod props;
pub mod resolve;
pub mod style;

pub use context::RenderContext;
pub use element::{
    DebugBlock, Element, Gap, GuardState, NestLevelGuard, Node, Provider, StyledText, StyledView,
    DEFAULT_MAX_LEVEL,
};
pub use props::{
    check_parameter_props, is_truthy, partition, Partitioned, Props, PARAMETER_PROPS,
};
pub use resolve::{resolve, StyleOverride};
pub use style::{
    is_scalable, scale_fragment, scale_fragments, text_styles, view_styles, ScaleFactor,
    StyleError, StyleFragment, StyleValue, Stylesheet, DEFAULT_STYLE, RESERVED_NAMES,
    SCALABLE_PROPERTIES,
};
