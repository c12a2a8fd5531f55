//! Spacer element.

use serde_json::Value;

use super::{Element, Node, StyledText, StyledView};
use crate::context::RenderContext;
use crate::resolve::StyleOverride;
use crate::style::StyleError;

/// A view holding a single blank line, sized by view flags.
///
/// ```rust
/// use docstyle::{Element, Gap, RenderContext};
///
/// let gap = Gap::new().flag("pad");
/// let node = gap.render(&RenderContext::new()).unwrap().unwrap();
/// assert_eq!(node.text_content(), " ");
/// ```
#[derive(Debug, Default)]
pub struct Gap {
    view: StyledView,
}

impl Gap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(mut self, name: &str) -> Self {
        self.view = self.view.flag(name);
        self
    }

    pub fn prop(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.view = self.view.prop(name, value);
        self
    }

    pub fn style(mut self, style: impl Into<StyleOverride>) -> Self {
        self.view = self.view.style(style);
        self
    }
}

impl Element for Gap {
    fn render(&self, ctx: &RenderContext) -> Result<Option<Node>, StyleError> {
        let spacer = StyledText::text(" ").render(ctx)?;
        self.view.build(ctx, spacer.into_iter().collect())
    }
}
