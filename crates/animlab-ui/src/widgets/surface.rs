#![allow(non_snake_case)]

use animlab_ui_graphics::Color;
use animlab_ui_layout::Alignment;

use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};

/// A filled container. Children are stacked like a box and receive the
/// surface's minimum constraints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSpec {
    pub color: Color,
    pub content_alignment: Alignment,
}

impl SurfaceSpec {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            content_alignment: Alignment::TOP_START,
        }
    }

    pub fn content_alignment(mut self, alignment: Alignment) -> Self {
        self.content_alignment = alignment;
        self
    }
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

pub fn Surface<A>(modifier: Modifier<A>, spec: SurfaceSpec, children: Vec<Node<A>>) -> Node<A> {
    Node::new(NodeKind::Surface(spec), modifier, children)
}
