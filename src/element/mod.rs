//! Styled elements and the node tree they render to.
//!
//! Elements are the thin wrappers that put the engine to work:
//!
//! - [`StyledText`]: text with flags from a text stylesheet, scaled by the context
//! - [`StyledView`]: a container with flags from the context's view stylesheet
//! - [`NestLevelGuard`]: caps recursive nesting depth
//! - [`DebugBlock`]: outlines its children when debugging is on
//! - [`Provider`]: publishes context values to a subtree
//! - [`Gap`]: a spacer view
//!
//! Rendering an element produces an optional [`Node`]; `None` means the
//! element renders nothing at all. The node tree is what gets handed to the
//! render primitive.

mod debug;
mod gap;
mod guard;
mod node;
mod provider;
mod text;
mod view;

use std::fmt;

use crate::context::RenderContext;
use crate::style::StyleError;

pub use debug::DebugBlock;
pub use gap::Gap;
pub use guard::{GuardState, NestLevelGuard, DEFAULT_MAX_LEVEL};
pub use node::Node;
pub use provider::Provider;
pub use text::StyledText;
pub use view::StyledView;

/// Something that can be rendered within a [`RenderContext`].
pub trait Element: fmt::Debug {
    /// Renders this element, or returns `None` if it renders nothing.
    fn render(&self, ctx: &RenderContext) -> Result<Option<Node>, StyleError>;
}

/// Owned child elements.
pub type Children = Vec<Box<dyn Element>>;

/// Renders each child with `ctx`, dropping the ones that render nothing.
pub(crate) fn render_children(
    children: &[Box<dyn Element>],
    ctx: &RenderContext,
) -> Result<Vec<Node>, StyleError> {
    let mut nodes = Vec::with_capacity(children.len());
    for child in children {
        if let Some(node) = child.render(ctx)? {
            nodes.push(node);
        }
    }
    Ok(nodes)
}

/// Wraps rendered children in a fragment, or nothing if there are none.
pub(crate) fn fragment_or_none(children: Vec<Node>) -> Option<Node> {
    if children.is_empty() {
        None
    } else {
        Some(Node::Fragment { children })
    }
}

impl Element for String {
    fn render(&self, _ctx: &RenderContext) -> Result<Option<Node>, StyleError> {
        Ok(Node::content(self))
    }
}

impl Element for &'static str {
    fn render(&self, _ctx: &RenderContext) -> Result<Option<Node>, StyleError> {
        Ok(Node::content(self))
    }
}

/// Pre-rendered nodes can be used as children as they are.
impl Element for Node {
    fn render(&self, _ctx: &RenderContext) -> Result<Option<Node>, StyleError> {
        Ok(Some(self.clone()))
    }
}
