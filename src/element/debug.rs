//! Layout debugging outline.

use super::{
    fragment_or_none, render_children, Children, Element, Node, StyledText, StyledView,
};
use crate::context::RenderContext;
use crate::style::{StyleError, StyleFragment};

const OUTLINE_COLOR: &str = "violet";

/// Outlines and labels its children when debugging is on.
///
/// Debugging is taken from the context unless set per element. When off,
/// the block adds nothing: a single child renders as itself, several as a
/// plain fragment.
///
/// # Example
///
/// ```rust
/// use docstyle::{DebugBlock, Element, Node, RenderContext};
///
/// let block = DebugBlock::new().label("header").child("Title");
///
/// let plain = block.render(&RenderContext::new()).unwrap().unwrap();
/// assert_eq!(plain, Node::Content { text: "Title".into() });
///
/// let debug = RenderContext::new().with_debug(true);
/// let outlined = block.render(&debug).unwrap().unwrap();
/// assert!(matches!(outlined, Node::View { .. }));
/// assert_eq!(outlined.text_content(), "headerTitle");
/// ```
#[derive(Debug, Default)]
pub struct DebugBlock {
    label: String,
    debug: Option<bool>,
    children: Children,
}

impl DebugBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Forces debugging on or off for this block, ignoring the context.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
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

    fn outline(
        &self,
        ctx: &RenderContext,
        children: Vec<Node>,
    ) -> Result<Option<Node>, StyleError> {
        let tag = StyledText::text(self.label.clone()).style(
            StyleFragment::new()
                .set("margin", 0)
                .set("backgroundColor", OUTLINE_COLOR)
                .set("color", "white"),
        );
        let frame = StyledView::new().style(
            StyleFragment::new()
                .set("borderColor", OUTLINE_COLOR)
                .set("borderWidth", 1)
                .set("margin", 1),
        );

        let mut nodes = Vec::with_capacity(children.len() + 1);
        nodes.extend(tag.render(ctx)?);
        nodes.extend(children);
        frame.build(ctx, nodes)
    }
}

impl Element for DebugBlock {
    fn render(&self, ctx: &RenderContext) -> Result<Option<Node>, StyleError> {
        let mut children = render_children(&self.children, ctx)?;
        if self.debug.unwrap_or(ctx.debug()) {
            log::debug!("debug outline for '{}'", self.label);
            self.outline(ctx, children)
        } else if children.len() == 1 {
            Ok(children.pop())
        } else {
            Ok(fragment_or_none(children))
        }
    }
}
