use animlab_ui_graphics::{Point, Size};

use crate::Constraints;

/// Main axis of a linear container: `Horizontal` for rows, `Vertical` for
/// columns. The other axis is the cross axis children are aligned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Extent of `size` along this axis.
    pub fn main(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    pub fn cross(self, size: Size) -> f32 {
        self.cross_axis().main(size)
    }

    /// Builds a size from main and cross extents.
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }

    /// `(min, max)` of `constraints` along this axis.
    pub fn main_bounds(self, constraints: &Constraints) -> (f32, f32) {
        match self {
            Axis::Horizontal => (constraints.min_width, constraints.max_width),
            Axis::Vertical => (constraints.min_height, constraints.max_height),
        }
    }

    /// `(min, max)` of `constraints` across this axis.
    pub fn cross_bounds(self, constraints: &Constraints) -> (f32, f32) {
        self.cross_axis().main_bounds(constraints)
    }
}
