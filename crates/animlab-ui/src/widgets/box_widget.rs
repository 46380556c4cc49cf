//! Box widget implementation

#![allow(non_snake_case)]

use animlab_ui_layout::Alignment;

use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};

/// Specification for Box layout behavior.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoxSpec {
    pub content_alignment: Alignment,
    pub propagate_min_constraints: bool,
}

impl BoxSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_alignment(mut self, alignment: Alignment) -> Self {
        self.content_alignment = alignment;
        self
    }

    pub fn propagate_min_constraints(mut self, propagate: bool) -> Self {
        self.propagate_min_constraints = propagate;
        self
    }
}

/// Overlays `children`, later ones on top.
pub fn Box<A>(modifier: Modifier<A>, spec: BoxSpec, children: Vec<Node<A>>) -> Node<A> {
    Node::new(NodeKind::Box(spec), modifier, children)
}
