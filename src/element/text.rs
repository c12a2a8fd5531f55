//! Styled text element.

use std::sync::Arc;

use serde_json::Value;

use super::{render_children, Children, Element, Node};
use crate::context::RenderContext;
use crate::props::{check_parameter_props, partition, Props};
use crate::resolve::{resolve, StyleOverride};
use crate::style::{scale_with, text_styles, ScaleFactor, StyleError, Stylesheet};

/// A text run styled by flags.
///
/// Flags are looked up in the text stylesheet (the built-in
/// [`text_styles`](crate::text_styles) unless another is supplied). The
/// resolved fragments are scaled by the explicit scale if one is set,
/// otherwise by the context's scale. An explicit scale applies to this
/// element only; children still see the context's value.
///
/// Renders nothing when it has no non-empty children.
///
/// # Example
///
/// ```rust
/// use docstyle::{Element, RenderContext, StyledText};
///
/// let title = StyledText::text("Report").flag("bold").flag("center").scale(2.0);
/// let node = title.render(&RenderContext::new()).unwrap().unwrap();
///
/// let style = node.merged_style();
/// assert_eq!(style.get("fontSize").and_then(|v| v.as_number()), Some(24.0));
/// assert_eq!(style.get("textAlign").and_then(|v| v.as_str()), Some("center"));
/// ```
#[derive(Debug, Default)]
pub struct StyledText {
    stylesheet: Option<Arc<Stylesheet>>,
    style: StyleOverride,
    scale: Option<f64>,
    number_of_lines: Option<u32>,
    break_word: bool,
    props: Props,
    children: Children,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a text element with a single string child.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new().child(content.into())
    }

    /// Uses `sheet` instead of the built-in text stylesheet.
    pub fn stylesheet(mut self, sheet: Arc<Stylesheet>) -> Self {
        self.stylesheet = Some(sheet);
        self
    }

    /// Sets the explicit style, merged after every flag.
    pub fn style(mut self, style: impl Into<StyleOverride>) -> Self {
        self.style = style.into();
        self
    }

    /// Scales this element by `scale` instead of the context's scale.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn number_of_lines(mut self, lines: u32) -> Self {
        self.number_of_lines = Some(lines);
        self
    }

    pub fn break_word(mut self, break_word: bool) -> Self {
        self.break_word = break_word;
        self
    }

    /// Switches on a flag.
    pub fn flag(self, name: &str) -> Self {
        self.prop(name, true)
    }

    /// Sets a prop. Props that aren't stylesheet flags are passed through.
    ///
    /// `style`, `stylesheet`, `scale` and `children` have their own builder
    /// methods; setting them here makes rendering fail.
    pub fn prop(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.props.insert(name, value);
        self
    }

    /// Replaces all props.
    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn child(mut self, child: impl Element + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Element>>,
    {
        self.children.extend(children);
        self
    }

    fn active_stylesheet(&self) -> Result<&Stylesheet, StyleError> {
        match &self.stylesheet {
            Some(sheet) => {
                sheet.validate()?;
                Ok(sheet.as_ref())
            }
            None => Ok(text_styles()),
        }
    }

    fn effective_scale(&self, ctx: &RenderContext) -> Result<ScaleFactor, StyleError> {
        match self.scale {
            Some(scale) => ScaleFactor::new(scale),
            None => Ok(ctx.scale()),
        }
    }
}

impl Element for StyledText {
    fn render(&self, ctx: &RenderContext) -> Result<Option<Node>, StyleError> {
        check_parameter_props(&self.props)?;
        let children = render_children(&self.children, ctx)?;
        if children.is_empty() {
            return Ok(None);
        }

        let sheet = self.active_stylesheet()?;
        let scale = self.effective_scale(ctx)?;
        let split = partition(&self.props, sheet);
        let style: Vec<_> = resolve(sheet, &split.style_flags, &self.style)
            .into_iter()
            .map(|fragment| scale_with(fragment, scale))
            .collect();
        log::trace!(
            "text: {} flag(s), {} pass-through, scale {}",
            split.style_flags.len(),
            split.pass_through.len(),
            scale
        );

        let mut props = split.pass_through;
        if let Some(lines) = self.number_of_lines {
            props.insert("numberOfLines", lines);
        }
        if self.break_word {
            props.insert("breakWord", true);
        }

        Ok(Some(Node::Text {
            style,
            props,
            children,
        }))
    }
}
