//! Pure math/data for drawing & units in animlab
//!
//! Colors, density-independent units and geometry primitives shared by the
//! animation, layout and rendering crates.

mod color;
mod geometry;
mod unit;

pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::unit::{Dp, Sp};
}

#[cfg(test)]
#[path = "tests/graphics_tests.rs"]
mod tests;
