//! Layout output: every node of a description tree resolved to absolute
//! pixel rectangles, with its paint and hit information attached.

mod engine;

use animlab_ui_graphics::{Color, Rect, Size};
use thiserror::Error;

pub use engine::LayoutEngine;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("viewport must be finite and non-negative, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("density must be positive and finite, got {0}")]
    InvalidDensity(f32),
    #[error("{kind} modifier resolved to a non-finite length: {value}")]
    NonFiniteLength { kind: &'static str, value: f32 },
}

/// A background painted by a modifier, in absolute pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Background {
    pub rect: Rect,
    pub color: Color,
    /// Opacity in effect where the background sits in the chain.
    pub alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    pub value: String,
    pub color: Color,
    pub font_size_px: f32,
    pub rect: Rect,
}

/// Where a tap triggers `action`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickTarget<A> {
    pub rect: Rect,
    pub action: A,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutBox<A> {
    pub kind: &'static str,
    /// Bounds reported to the parent.
    pub rect: Rect,
    /// Where the node's own content is drawn, after padding and offsets.
    pub content_rect: Rect,
    /// Opacity of the content, ancestors included.
    pub alpha: f32,
    pub backgrounds: Vec<Background>,
    pub text: Option<TextLayout>,
    pub click: Option<ClickTarget<A>>,
    pub test_tag: Option<String>,
    pub children: Vec<LayoutBox<A>>,
}

impl<A> LayoutBox<A> {
    pub(crate) fn translate(&mut self, dx: f32, dy: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.rect = self.rect.translate(dx, dy);
        self.content_rect = self.content_rect.translate(dx, dy);
        for background in &mut self.backgrounds {
            background.rect = background.rect.translate(dx, dy);
        }
        if let Some(text) = &mut self.text {
            text.rect = text.rect.translate(dx, dy);
        }
        if let Some(click) = &mut self.click {
            click.rect = click.rect.translate(dx, dy);
        }
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(LayoutBox::node_count)
            .sum::<usize>()
    }

    fn hit_test(&self, x: f32, y: f32) -> Option<&ClickTarget<A>> {
        self.children
            .iter()
            .rev()
            .find_map(|child| child.hit_test(x, y))
            .or_else(|| self.click.as_ref().filter(|click| click.rect.contains(x, y)))
    }

    fn find(&self, predicate: &dyn Fn(&LayoutBox<A>) -> bool) -> Option<&LayoutBox<A>> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    fn clickable_for_text<'a>(
        &'a self,
        text: &str,
        enclosing: Option<&'a ClickTarget<A>>,
    ) -> Option<&'a ClickTarget<A>> {
        let enclosing = self.click.as_ref().or(enclosing);
        if self.text.as_ref().is_some_and(|layout| layout.value == text) {
            if let Some(target) = enclosing {
                return Some(target);
            }
        }
        self.children
            .iter()
            .rev()
            .find_map(|child| child.clickable_for_text(text, enclosing))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutTree<A> {
    root: LayoutBox<A>,
    viewport: Size,
}

impl<A> LayoutTree<A> {
    pub fn new(root: LayoutBox<A>, viewport: Size) -> Self {
        Self { root, viewport }
    }

    pub fn root(&self) -> &LayoutBox<A> {
        &self.root
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Topmost clickable under the point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&ClickTarget<A>> {
        self.root.hit_test(x, y)
    }

    /// Nearest clickable enclosing a text node whose value is `text`.
    pub fn clickable_for_text(&self, text: &str) -> Option<&ClickTarget<A>> {
        self.root.clickable_for_text(text, None)
    }

    pub fn find_text(&self, text: &str) -> Option<&LayoutBox<A>> {
        self.root
            .find(&|layout| layout.text.as_ref().is_some_and(|t| t.value == text))
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&LayoutBox<A>> {
        self.root
            .find(&|layout| layout.test_tag.as_deref() == Some(tag))
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
