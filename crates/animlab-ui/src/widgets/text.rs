#![allow(non_snake_case)]

use crate::modifier::Modifier;
use crate::node::{Node, NodeKind, TextStyle};

/// A single run of text, sized by the layout engine's text measurer.
pub fn Text<A>(value: impl Into<String>, modifier: Modifier<A>, style: TextStyle) -> Node<A> {
    Node::new(
        NodeKind::Text {
            value: value.into(),
            style,
        },
        modifier,
        Vec::new(),
    )
}
