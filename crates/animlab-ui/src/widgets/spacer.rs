//! Spacer widget implementation

#![allow(non_snake_case)]

use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};

/// Empty space sized entirely by its modifier, e.g.
/// `Spacer(Modifier::empty().height(dp(24.0)))`.
pub fn Spacer<A>(modifier: Modifier<A>) -> Node<A> {
    Node::new(NodeKind::Spacer, modifier, Vec::new())
}
