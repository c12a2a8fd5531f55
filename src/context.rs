//! Render context threaded through element trees.
//!
//! A [`RenderContext`] carries the ambient values that nested elements read
//! without explicit prop threading: the scale factor, the nest-guard depth,
//! the debug flag, and the stylesheet used by views. Contexts are immutable;
//! an element that changes a value for its descendants derives a new context
//! and renders its children with it, so changes never leak to siblings.

use std::sync::Arc;

use crate::style::{view_styles, ScaleFactor, StyleError, Stylesheet};

/// Ambient values visible to an element during rendering.
///
/// # Example
///
/// ```rust
/// use docstyle::RenderContext;
///
/// let root = RenderContext::new();
/// let child = root.with_scale(2.0).unwrap().nested();
///
/// assert_eq!(root.scale().get(), 1.0);
/// assert_eq!(child.scale().get(), 2.0);
/// assert_eq!(child.nest_level(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    scale: ScaleFactor,
    nest_level: usize,
    debug: bool,
    view_stylesheet: Option<Arc<Stylesheet>>,
}

impl RenderContext {
    /// Creates the root context: scale 1, depth 0, debug off, built-in view styles.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Number of [`NestLevelGuard`](crate::element::NestLevelGuard)s above this point.
    pub fn nest_level(&self) -> usize {
        self.nest_level
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// The stylesheet [`StyledView`](crate::element::StyledView) uses when none is given.
    pub fn view_stylesheet(&self) -> &Stylesheet {
        match &self.view_stylesheet {
            Some(sheet) => sheet.as_ref(),
            None => view_styles(),
        }
    }

    /// Derives a context with a different scale.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidScale`] if `scale` is not positive and finite.
    pub fn with_scale(&self, scale: f64) -> Result<Self, StyleError> {
        Ok(self.with_scale_factor(ScaleFactor::new(scale)?))
    }

    pub fn with_scale_factor(&self, scale: ScaleFactor) -> Self {
        Self {
            scale,
            ..self.clone()
        }
    }

    pub fn with_debug(&self, debug: bool) -> Self {
        Self {
            debug,
            ..self.clone()
        }
    }

    /// Derives a context whose views default to `sheet`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::ReservedFlag`] if `sheet` fails validation.
    pub fn with_view_stylesheet(
        &self,
        sheet: Arc<Stylesheet>,
    ) -> Result<Self, StyleError> {
        sheet.validate()?;
        Ok(Self {
            view_stylesheet: Some(sheet),
            ..self.clone()
        })
    }

    /// Derives the context seen below one more nest guard.
    pub fn nested(&self) -> Self {
        Self {
            nest_level: self.nest_level + 1,
            ..self.clone()
        }
    }
}
