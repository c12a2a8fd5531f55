//! Context provider element.

use std::sync::Arc;

use super::{fragment_or_none, render_children, Children, Element, Node};
use crate::context::RenderContext;
use crate::style::{StyleError, Stylesheet};

/// Publishes context values to its children.
///
/// Values that aren't set are inherited from the surrounding context. The
/// provider itself renders no element, only its children.
///
/// # Example
///
/// ```rust
/// use docstyle::{Element, Provider, RenderContext, StyledText};
///
/// let page = Provider::new().scale(2.0).child(StyledText::text("big"));
/// let node = page.render(&RenderContext::new()).unwrap().unwrap();
///
/// let text = &node.children()[0];
/// assert_eq!(text.merged_style().get("fontSize").and_then(|v| v.as_number()), Some(24.0));
/// ```
#[derive(Debug, Default)]
pub struct Provider {
    scale: Option<f64>,
    debug: Option<bool>,
    view_stylesheet: Option<Arc<Stylesheet>>,
    children: Children,
}

impl Provider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn view_stylesheet(mut self, sheet: Arc<Stylesheet>) -> Self {
        self.view_stylesheet = Some(sheet);
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

    /// The context this provider's children render with.
    pub fn child_context(
        &self,
        ctx: &RenderContext,
    ) -> Result<RenderContext, StyleError> {
        let mut inner = ctx.clone();
        if let Some(scale) = self.scale {
            inner = inner.with_scale(scale)?;
        }
        if let Some(debug) = self.debug {
            inner = inner.with_debug(debug);
        }
        if let Some(sheet) = &self.view_stylesheet {
            inner = inner.with_view_stylesheet(Arc::clone(sheet))?;
        }
        Ok(inner)
    }
}

impl Element for Provider {
    fn render(&self, ctx: &RenderContext) -> Result<Option<Node>, StyleError> {
        let inner = self.child_context(ctx)?;
        let children = render_children(&self.children, &inner)?;
        Ok(fragment_or_none(children))
    }
}
