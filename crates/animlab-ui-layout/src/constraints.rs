//! Layout constraints system

use animlab_ui_graphics::{EdgeInsets, Size};

/// Size bounds a node is measured under, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Exactly `size`.
    pub fn tight(size: Size) -> Self {
        Self {
            min_width: size.width,
            max_width: size.width,
            min_height: size.height,
            max_height: size.height,
        }
    }

    /// Anything up to `size`.
    pub fn loose(size: Size) -> Self {
        Self {
            min_width: 0.0,
            max_width: size.width,
            min_height: 0.0,
            max_height: size.height,
        }
    }

    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    pub fn is_bounded(&self) -> bool {
        self.max_width.is_finite() && self.max_height.is_finite()
    }

    /// No bound is NaN and every minimum is finite, non-negative and at most
    /// its maximum.
    pub fn is_valid(&self) -> bool {
        let axis_valid = |min: f32, max: f32| min.is_finite() && min >= 0.0 && !max.is_nan() && min <= max;
        axis_valid(self.min_width, self.max_width) && axis_valid(self.min_height, self.max_height)
    }

    /// Clamps `size` into these bounds.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Smallest size these constraints allow.
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Shrinks every bound by `insets`, never below zero.
    pub fn deflate(self, insets: EdgeInsets) -> Self {
        let horizontal = insets.horizontal_sum();
        let vertical = insets.vertical_sum();
        Self {
            min_width: (self.min_width - horizontal).max(0.0),
            max_width: (self.max_width - horizontal).max(0.0),
            min_height: (self.min_height - vertical).max(0.0),
            max_height: (self.max_height - vertical).max(0.0),
        }
    }

    pub fn loosen(self) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            ..self
        }
    }

    /// Fixes the width, coerced into the current width bounds.
    pub fn with_exact_width(self, width: f32) -> Self {
        let width = width.clamp(self.min_width, self.max_width);
        Self {
            min_width: width,
            max_width: width,
            ..self
        }
    }

    /// Fixes the height, coerced into the current height bounds.
    pub fn with_exact_height(self, height: f32) -> Self {
        let height = height.clamp(self.min_height, self.max_height);
        Self {
            min_height: height,
            max_height: height,
            ..self
        }
    }

    /// Raises the minimum width to the maximum when the width is bounded.
    pub fn fill_width(self) -> Self {
        if self.max_width.is_finite() {
            Self {
                min_width: self.max_width,
                ..self
            }
        } else {
            self
        }
    }

    /// Raises the minimum height to the maximum when the height is bounded.
    pub fn fill_height(self) -> Self {
        if self.max_height.is_finite() {
            Self {
                min_height: self.max_height,
                ..self
            }
        } else {
            self
        }
    }

    /// Raises both minimums so the result is at least `size` where the
    /// maximums allow it.
    pub fn at_least(self, size: Size) -> Self {
        Self {
            min_width: size.width.clamp(self.min_width, self.max_width),
            min_height: size.height.clamp(self.min_height, self.max_height),
            ..self
        }
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
