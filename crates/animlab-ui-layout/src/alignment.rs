//! Alignment utilities for positioning content

use animlab_ui_graphics::{Point, Size};

/// Offset of `child` inside `available` for a bias in `[-1, 1]`, where -1 is
/// the leading edge and 1 the trailing edge. Content larger than the space
/// sticks to the leading edge.
fn biased_offset(bias: f32, available: f32, child: f32) -> f32 {
    let remaining = available - child;
    if remaining <= 0.0 {
        return 0.0;
    }
    remaining / 2.0 * (1.0 + bias)
}

/// Alignment across both axes used for positioning content within a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const TOP_START: Self = Self::new(HorizontalAlignment::Start, VerticalAlignment::Top);
    pub const TOP_CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::Top,
    );
    pub const CENTER_START: Self = Self::new(
        HorizontalAlignment::Start,
        VerticalAlignment::CenterVertically,
    );
    pub const CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::CenterVertically,
    );
    pub const BOTTOM_CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::Bottom,
    );
    pub const BOTTOM_END: Self = Self::new(HorizontalAlignment::End, VerticalAlignment::Bottom);

    /// Top-left position of `content` placed inside `container`.
    pub fn align(&self, container: Size, content: Size) -> Point {
        Point::new(
            self.horizontal.align(container.width, content.width),
            self.vertical.align(container.height, content.height),
        )
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::TOP_START
    }
}

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    #[default]
    Start,
    CenterHorizontally,
    End,
}

impl HorizontalAlignment {
    fn bias(self) -> f32 {
        match self {
            HorizontalAlignment::Start => -1.0,
            HorizontalAlignment::CenterHorizontally => 0.0,
            HorizontalAlignment::End => 1.0,
        }
    }

    pub fn align(&self, available: f32, child: f32) -> f32 {
        biased_offset(self.bias(), available, child)
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    CenterVertically,
    Bottom,
}

impl VerticalAlignment {
    fn bias(self) -> f32 {
        match self {
            VerticalAlignment::Top => -1.0,
            VerticalAlignment::CenterVertically => 0.0,
            VerticalAlignment::Bottom => 1.0,
        }
    }

    pub fn align(&self, available: f32, child: f32) -> f32 {
        biased_offset(self.bias(), available, child)
    }
}
