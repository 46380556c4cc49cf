//! Column widget implementation

#![allow(non_snake_case)]

use animlab_ui_layout::{HorizontalAlignment, LinearArrangement};

use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};

/// Specification for Column layout behavior.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ColumnSpec {
    pub vertical_arrangement: LinearArrangement,
    pub horizontal_alignment: HorizontalAlignment,
}

impl ColumnSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical_arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.vertical_arrangement = arrangement;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }
}

/// Stacks `children` top to bottom.
pub fn Column<A>(modifier: Modifier<A>, spec: ColumnSpec, children: Vec<Node<A>>) -> Node<A> {
    Node::new(NodeKind::Column(spec), modifier, children)
}
