//! Button widget implementation

#![allow(non_snake_case)]

use animlab_ui_graphics::{dp, Color, Dp, EdgeInsets};

use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};

/// Container color and metrics of a filled button. Lengths are in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonSpec {
    pub container_color: Color,
    pub content_padding: EdgeInsets,
    pub min_width: Dp,
    pub min_height: Dp,
}

impl ButtonSpec {
    pub const DEFAULT_CONTAINER_COLOR: Color = Color::from_argb(0xFF67_50A4);

    pub fn filled(container_color: Color) -> Self {
        Self {
            container_color,
            content_padding: EdgeInsets::symmetric(24.0, 8.0),
            min_width: dp(58.0),
            min_height: dp(40.0),
        }
    }
}

impl Default for ButtonSpec {
    fn default() -> Self {
        Self::filled(Self::DEFAULT_CONTAINER_COLOR)
    }
}

/// A filled button. Its content is laid out as a centered row inside the
/// content padding, and a tap anywhere on it reports `on_click`.
pub fn Button<A>(
    modifier: Modifier<A>,
    spec: ButtonSpec,
    on_click: A,
    content: Vec<Node<A>>,
) -> Node<A> {
    Node::new(NodeKind::Button(spec), modifier.clickable(on_click), content)
}
