//! The description tree a screen renders into.

use animlab_ui_graphics::{sp, Color, Sp};

use crate::modifier::Modifier;
use crate::widgets::{BoxSpec, ButtonSpec, ColumnSpec, RowSpec, SurfaceSpec};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font_size: Sp,
}

impl TextStyle {
    pub fn new(color: Color, font_size: Sp) -> Self {
        Self { color, font_size }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_size(mut self, font_size: Sp) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            font_size: sp(16.0),
        }
    }
}

/// What a node is, independent of its modifiers and children.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Column(ColumnSpec),
    Row(RowSpec),
    Box(BoxSpec),
    Surface(SurfaceSpec),
    Button(ButtonSpec),
    Text { value: String, style: TextStyle },
    Spacer,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Column(_) => "Column",
            NodeKind::Row(_) => "Row",
            NodeKind::Box(_) => "Box",
            NodeKind::Surface(_) => "Surface",
            NodeKind::Button(_) => "Button",
            NodeKind::Text { .. } => "Text",
            NodeKind::Spacer => "Spacer",
        }
    }
}

/// One element of the description tree.
///
/// Trees are plain values: building the same tree twice from the same
/// inputs yields equal trees, and nothing in a tree can mutate state.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<A> {
    kind: NodeKind,
    modifier: Modifier<A>,
    children: Vec<Node<A>>,
}

impl<A> Node<A> {
    pub fn new(kind: NodeKind, modifier: Modifier<A>, children: Vec<Node<A>>) -> Self {
        Self {
            kind,
            modifier,
            children,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn modifier(&self) -> &Modifier<A> {
        &self.modifier
    }

    pub fn children(&self) -> &[Node<A>] {
        &self.children
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Depth-first search for the first node matching `predicate`.
    pub fn find(&self, predicate: &dyn Fn(&Node<A>) -> bool) -> Option<&Node<A>> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    pub fn find_text(&self, text: &str) -> Option<&Node<A>> {
        self.find(&|node| node.text() == Some(text))
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Node<A>> {
        self.find(&|node| node.modifier.tag() == Some(tag))
    }
}
