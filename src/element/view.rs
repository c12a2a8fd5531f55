//! Styled container element.

use std::sync::Arc;

use serde_json::Value;

use super::{render_children, Children, Element, Node};
use crate::context::RenderContext;
use crate::props::{check_parameter_props, partition, Props};
use crate::resolve::{resolve, StyleOverride};
use crate::style::{StyleError, Stylesheet};

/// A layout container styled by flags.
///
/// Flags come from the context's view stylesheet unless one is supplied
/// explicitly. Views are never scaled and don't change the context for
/// their children.
///
/// # Example
///
/// ```rust
/// use docstyle::{Element, RenderContext, StyledText, StyledView};
///
/// let row = StyledView::new()
///     .flag("row")
///     .flag("sgap")
///     .prop("wrap", false)
///     .child(StyledText::text("left"))
///     .child(StyledText::text("right"));
///
/// let node = row.render(&RenderContext::new()).unwrap().unwrap();
/// assert_eq!(node.children().len(), 2);
/// assert_eq!(node.merged_style().get("flexDirection").and_then(|v| v.as_str()), Some("row"));
/// assert!(node.props().unwrap().has("wrap"));
/// ```
#[derive(Debug, Default)]
pub struct StyledView {
    stylesheet: Option<Arc<Stylesheet>>,
    style: StyleOverride,
    props: Props,
    children: Children,
}

impl StyledView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `sheet` instead of the context's view stylesheet.
    pub fn stylesheet(mut self, sheet: Arc<Stylesheet>) -> Self {
        self.stylesheet = Some(sheet);
        self
    }

    pub fn style(mut self, style: impl Into<StyleOverride>) -> Self {
        self.style = style.into();
        self
    }

    pub fn flag(self, name: &str) -> Self {
        self.prop(name, true)
    }

    pub fn prop(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.props.insert(name, value);
        self
    }

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

    /// Builds the view node around already rendered children.
    pub(crate) fn build(
        &self,
        ctx: &RenderContext,
        children: Vec<Node>,
    ) -> Result<Option<Node>, StyleError> {
        check_parameter_props(&self.props)?;
        if children.is_empty() {
            return Ok(None);
        }

        let sheet = match &self.stylesheet {
            Some(sheet) => {
                sheet.validate()?;
                sheet.as_ref()
            }
            None => ctx.view_stylesheet(),
        };
        let split = partition(&self.props, sheet);
        let style: Vec<_> = resolve(sheet, &split.style_flags, &self.style)
            .into_iter()
            .cloned()
            .collect();
        log::trace!(
            "view: {} flag(s), {} pass-through",
            split.style_flags.len(),
            split.pass_through.len()
        );

        Ok(Some(Node::View {
            style,
            props: split.pass_through,
            children,
        }))
    }
}

impl Element for StyledView {
    fn render(&self, ctx: &RenderContext) -> Result<Option<Node>, StyleError> {
        let children = render_children(&self.children, ctx)?;
        self.build(ctx, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::StyledText;
    use crate::style::{StyleFragment, StyleValue};

    #[test]
    fn test_no_children_renders_nothing() {
        let ctx = RenderContext::new();
        assert_eq!(StyledView::new().flag("card").render(&ctx).unwrap(), None);
        assert_eq!(
            StyledView::new().child(StyledText::new()).render(&ctx).unwrap(),
            None
        );
    }

    #[test]
    fn test_uses_context_stylesheet() {
        let sheet = Arc::new(
            Stylesheet::new()
                .add("default", StyleFragment::new().set("padding", 1))
                .add("card", StyleFragment::new().set("borderWidth", 3)),
        );
        let ctx = RenderContext::new().with_view_stylesheet(sheet).unwrap();
        let node = StyledView::new()
            .flag("card")
            .flag("row")
            .child("x")
            .render(&ctx)
            .unwrap()
            .unwrap();

        assert_eq!(node.style().len(), 2);
        assert_eq!(node.merged_style().get("borderWidth"), Some(&StyleValue::from(3)));
        // "row" isn't in this sheet, so it is forwarded.
        assert!(node.props().unwrap().has("row"));
    }

    #[test]
    fn test_explicit_stylesheet_beats_context() {
        let sheet = Arc::new(
            Stylesheet::new().add("tight", StyleFragment::new().set("gap", 1)),
        );
        let node = StyledView::new()
            .stylesheet(sheet)
            .flag("tight")
            .flag("card")
            .child("x")
            .render(&RenderContext::new())
            .unwrap()
            .unwrap();
        assert_eq!(node.merged_style().get("gap"), Some(&StyleValue::from(1)));
        assert!(node.props().unwrap().has("card"));
    }

    #[test]
    fn test_views_ignore_scale() {
        let ctx = RenderContext::new().with_scale(2.0).unwrap();
        let node = StyledView::new()
            .flag("pad")
            .child("x")
            .render(&ctx)
            .unwrap()
            .unwrap();
        assert_eq!(node.merged_style().get("padding"), Some(&StyleValue::from(20)));
    }

    #[test]
    fn test_children_inherit_context() {
        let ctx = RenderContext::new().with_scale(2.0).unwrap();
        let node = StyledView::new()
            .child(StyledText::text("x"))
            .render(&ctx)
            .unwrap()
            .unwrap();
        let text = &node.children()[0];
        assert_eq!(text.merged_style().get("fontSize"), Some(&StyleValue::from(24)));
    }

    #[test]
    fn test_parameter_names_rejected_as_props() {
        let ctx = RenderContext::new();
        for name in ["style", "stylesheet", "scale", "children"] {
            let result = StyledView::new()
                .prop(name, "x")
                .child("x")
                .render(&ctx);
            assert_eq!(
                result,
                Err(StyleError::ReservedProp {
                    name: name.to_string()
                })
            );
        }
    }

    #[test]
    fn test_style_override_last() {
        let node = StyledView::new()
            .flag("pad")
            .style(vec![
                StyleFragment::new().set("padding", 3),
                StyleFragment::new().set("margin", 1),
            ])
            .child("x")
            .render(&RenderContext::new())
            .unwrap()
            .unwrap();
        let style = node.style();
        assert_eq!(style.len(), 4);
        assert_eq!(style[2], StyleFragment::new().set("padding", 3));
        assert_eq!(node.merged_style().get("padding"), Some(&StyleValue::from(3)));
    }
}
