//! Modifier chain attached to every [`Node`](crate::Node).
//!
//! Elements apply outer to inner in the order they were chained: constraints
//! flow inward through them during measurement and sizes flow back out.
//! Interaction is declared with a typed action value rather than a closure so
//! two modifiers built from the same inputs compare equal.

mod background;
mod clickable;
mod fill;
mod offset;
mod padding;
mod size;

use smallvec::SmallVec;

pub use animlab_ui_graphics::{Color, Dp, EdgeInsets, Point, Rect, Size};

/// A single link in a [`Modifier`] chain. Lengths are in dp.
#[derive(Clone, Debug, PartialEq)]
pub enum ModifierElement<A> {
    Size {
        width: Option<Dp>,
        height: Option<Dp>,
    },
    Fill {
        width: bool,
        height: bool,
    },
    Padding(EdgeInsets),
    Offset {
        x: Dp,
        y: Dp,
    },
    Background(Color),
    Alpha(f32),
    Clickable(A),
    TestTag(String),
}

impl<A> ModifierElement<A> {
    pub fn name(&self) -> &'static str {
        match self {
            ModifierElement::Size { .. } => "size",
            ModifierElement::Fill { .. } => "fill",
            ModifierElement::Padding(_) => "padding",
            ModifierElement::Offset { .. } => "offset",
            ModifierElement::Background(_) => "background",
            ModifierElement::Alpha(_) => "alpha",
            ModifierElement::Clickable(_) => "clickable",
            ModifierElement::TestTag(_) => "testTag",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Modifier<A> {
    elements: SmallVec<[ModifierElement<A>; 4]>,
}

impl<A> Modifier<A> {
    pub fn empty() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    fn with_element(element: ModifierElement<A>) -> Self {
        let mut elements = SmallVec::new();
        elements.push(element);
        Self { elements }
    }

    /// Appends `next` inside this chain.
    pub fn then(mut self, next: Modifier<A>) -> Self {
        self.elements.extend(next.elements);
        self
    }

    pub fn elements(&self) -> &[ModifierElement<A>] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Action of the innermost clickable element.
    pub fn click_action(&self) -> Option<&A> {
        self.elements.iter().rev().find_map(|element| match element {
            ModifierElement::Clickable(action) => Some(action),
            _ => None,
        })
    }

    /// Innermost test tag.
    pub fn tag(&self) -> Option<&str> {
        self.elements.iter().rev().find_map(|element| match element {
            ModifierElement::TestTag(tag) => Some(tag.as_str()),
            _ => None,
        })
    }
}

impl<A> Default for Modifier<A> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[path = "../tests/modifier_tests.rs"]
mod tests;
