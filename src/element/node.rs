//! Output nodes handed to the render primitive.

use serde::Serialize;

use crate::props::Props;
use crate::style::StyleFragment;

/// A rendered element.
///
/// `Text` and `View` carry the resolved (and, for text, scaled) style list in
/// merge order together with the pass-through props; the render primitive
/// merges the list itself. Serializes as JSON with a `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A text run.
    Text {
        style: Vec<StyleFragment>,
        props: Props,
        children: Vec<Node>,
    },
    /// A layout container.
    View {
        style: Vec<StyleFragment>,
        props: Props,
        children: Vec<Node>,
    },
    /// Raw string content.
    Content { text: String },
    /// Children with no element of their own.
    Fragment { children: Vec<Node> },
}

impl Node {
    /// Creates a content node, or `None` for an empty string.
    pub fn content(text: &str) -> Option<Node> {
        if text.is_empty() {
            None
        } else {
            Some(Node::Content {
                text: text.to_string(),
            })
        }
    }

    /// The style list, empty for content and fragments.
    pub fn style(&self) -> &[StyleFragment] {
        match self {
            Node::Text { style, .. } | Node::View { style, .. } => style,
            Node::Content { .. } | Node::Fragment { .. } => &[],
        }
    }

    /// The pass-through props, if this node has any.
    pub fn props(&self) -> Option<&Props> {
        match self {
            Node::Text { props, .. } | Node::View { props, .. } => Some(props),
            Node::Content { .. } | Node::Fragment { .. } => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text { children, .. }
            | Node::View { children, .. }
            | Node::Fragment { children } => children,
            Node::Content { .. } => &[],
        }
    }

    /// The style list folded into a single fragment, later entries winning.
    pub fn merged_style(&self) -> StyleFragment {
        StyleFragment::merge(self.style())
    }

    /// Concatenated text of all content nodes below this one, in order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Content { text } => out.push_str(text),
            _ => self.children().iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Serializes the node tree to JSON for an out-of-process renderer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
