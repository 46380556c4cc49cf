//! Description tree, modifiers and layout for animlab
//!
//! Screens describe their UI as a [`Node`] tree built with the widget
//! functions ([`Column`], [`Row`], [`Box`], [`Surface`], [`Button`],
//! [`Text`], [`Spacer`]). The tree is a value: clicks are typed actions
//! stored in the modifier chain, so nothing runs while a tree is built. The
//! [`LayoutEngine`] turns a tree into a [`LayoutTree`] of absolute rectangles
//! that renderers paint and the shell hit tests.

#![allow(non_snake_case)]

pub mod debug;
mod layout;
pub mod modifier;
mod node;
mod text;
pub mod widgets;

pub use debug::{format_layout_tree, format_node_tree, log_layout_tree};
pub use layout::{
    Background, ClickTarget, LayoutBox, LayoutEngine, LayoutError, LayoutTree, TextLayout,
};
pub use modifier::{Modifier, ModifierElement};
pub use node::{Node, NodeKind, TextStyle};
pub use text::{MonospacedTextMeasurer, TextMeasurer, TextMetrics};
pub use widgets::*;

pub use animlab_ui_graphics::{dp, sp, Color, Dp, EdgeInsets, Point, Rect, Size, Sp};
pub use animlab_ui_layout::{
    Alignment, Arrangement, Constraints, HorizontalAlignment, LinearArrangement,
    VerticalAlignment,
};

pub mod prelude {
    pub use crate::modifier::Modifier;
    pub use crate::node::{Node, TextStyle};
    pub use crate::widgets::*;
    pub use animlab_ui_graphics::{dp, sp, Color};
    pub use animlab_ui_layout::{Alignment, HorizontalAlignment, LinearArrangement, VerticalAlignment};
}
