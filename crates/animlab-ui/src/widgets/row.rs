//! Row widget implementation

#![allow(non_snake_case)]

use animlab_ui_layout::{LinearArrangement, VerticalAlignment};

use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RowSpec {
    pub horizontal_arrangement: LinearArrangement,
    pub vertical_alignment: VerticalAlignment,
}

impl RowSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal_arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.horizontal_arrangement = arrangement;
        self
    }

    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }
}

/// Places `children` left to right.
pub fn Row<A>(modifier: Modifier<A>, spec: RowSpec, children: Vec<Node<A>>) -> Node<A> {
    Node::new(NodeKind::Row(spec), modifier, children)
}
