//! Nesting depth guard.

use std::cell::Cell;

use super::{fragment_or_none, render_children, Children, Element, Node};
use crate::context::RenderContext;
use crate::style::StyleError;

/// Maximum depth used by [`NestLevelGuard::new`].
pub const DEFAULT_MAX_LEVEL: usize = 10;

/// Whether a guard renders its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Hidden,
    Shown,
}

/// Stops rendering once too many guards are nested.
///
/// Each guard renders its children one level deeper than the context it was
/// rendered in. A guard whose own depth is below `max_level` shows its
/// children; deeper guards render nothing until [`show_more`](Self::show_more)
/// is called. Once a guard has been shown, by either route, it stays shown.
///
/// # Example
///
/// ```rust
/// use docstyle::{Element, GuardState, NestLevelGuard, RenderContext};
///
/// let guard = NestLevelGuard::new().max_level(1).child("deep");
/// let ctx = RenderContext::new().nested();
///
/// assert_eq!(guard.state(&ctx), GuardState::Hidden);
/// assert!(guard.render(&ctx).unwrap().is_none());
///
/// guard.show_more();
/// assert_eq!(guard.state(&ctx), GuardState::Shown);
/// assert!(guard.render(&ctx).unwrap().is_some());
/// ```
#[derive(Debug)]
pub struct NestLevelGuard {
    max_level: usize,
    revealed: Cell<bool>,
    children: Children,
}

impl NestLevelGuard {
    pub fn new() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            revealed: Cell::new(false),
            children: Vec::new(),
        }
    }

    pub fn max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
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

    /// Reveals the children regardless of depth. Cannot be undone.
    pub fn show_more(&self) {
        self.revealed.set(true);
    }

    /// The state this guard would render in under `ctx`.
    pub fn state(&self, ctx: &RenderContext) -> GuardState {
        if self.revealed.get() || ctx.nest_level() < self.max_level {
            GuardState::Shown
        } else {
            GuardState::Hidden
        }
    }
}

impl Default for NestLevelGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for NestLevelGuard {
    fn render(&self, ctx: &RenderContext) -> Result<Option<Node>, StyleError> {
        match self.state(ctx) {
            GuardState::Hidden => {
                log::debug!(
                    "nest guard hiding children at level {} (max {})",
                    ctx.nest_level(),
                    self.max_level
                );
                Ok(None)
            }
            GuardState::Shown => {
                self.revealed.set(true);
                let children = render_children(&self.children, &ctx.nested())?;
                Ok(fragment_or_none(children))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(
        name: &'static str,
        max: usize,
        inner: Option<NestLevelGuard>,
    ) -> NestLevelGuard {
        let guard = NestLevelGuard::new().max_level(max).child(name);
        match inner {
            Some(inner) => guard.child(inner),
            None => guard,
        }
    }

    #[test]
    fn test_three_levels_with_max_two() {
        let tree = level(
            "one",
            2,
            Some(level("two", 2, Some(level("three", 2, None)))),
        );
        let node = tree.render(&RenderContext::new()).unwrap().unwrap();

        assert_eq!(node.text_content(), "onetwo");
        // Outer fragment: "one" plus the second guard's fragment.
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[1].children().len(), 1);
    }

    #[test]
    fn test_default_max_level() {
        let guard = NestLevelGuard::new().child("x");
        let mut ctx = RenderContext::new();
        for _ in 0..DEFAULT_MAX_LEVEL - 1 {
            ctx = ctx.nested();
        }
        assert_eq!(guard.state(&ctx), GuardState::Shown);
        assert_eq!(guard.state(&ctx.nested()), GuardState::Hidden);
    }

    #[test]
    fn test_children_see_incremented_level() {
        #[derive(Debug)]
        struct LevelProbe;
        impl Element for LevelProbe {
            fn render(&self, ctx: &RenderContext) -> Result<Option<Node>, StyleError> {
                Ok(Node::content(&ctx.nest_level().to_string()))
            }
        }

        let guard = NestLevelGuard::new().child(LevelProbe);
        let ctx = RenderContext::new().nested().nested();
        let node = guard.render(&ctx).unwrap().unwrap();
        assert_eq!(node.text_content(), "3");
    }

    #[test]
    fn test_show_more_is_irreversible() {
        let guard = NestLevelGuard::new().max_level(0).child("x");
        let ctx = RenderContext::new();
        assert_eq!(guard.state(&ctx), GuardState::Hidden);

        guard.show_more();
        guard.show_more();
        assert_eq!(guard.state(&ctx), GuardState::Shown);
        assert_eq!(guard.state(&ctx.nested().nested()), GuardState::Shown);
    }

    #[test]
    fn test_shown_render_latches() {
        let guard = NestLevelGuard::new().max_level(1).child("x");
        assert!(guard.render(&RenderContext::new()).unwrap().is_some());

        let deep = RenderContext::new().nested().nested();
        assert_eq!(guard.state(&deep), GuardState::Shown);
        assert!(guard.render(&deep).unwrap().is_some());
    }

    #[test]
    fn test_shown_without_children_renders_nothing() {
        let guard = NestLevelGuard::new();
        assert_eq!(guard.render(&RenderContext::new()).unwrap(), None);
    }
}
