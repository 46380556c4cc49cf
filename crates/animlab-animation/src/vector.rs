use animlab_ui_graphics::{Color, Dp, Point};
use smallvec::{smallvec, SmallVec};

/// Per-component representation of an animated value.
pub type AnimationVector = SmallVec<[f32; 4]>;

/// Values that can be animated component by component.
pub trait VectorConvertible: Clone + PartialEq + std::fmt::Debug + 'static {
    /// Displacement below which a spring on this type counts as settled.
    const VISIBILITY_THRESHOLD: f32;

    fn to_vector(&self) -> AnimationVector;

    fn from_vector(vector: &[f32]) -> Self;
}

impl VectorConvertible for f32 {
    const VISIBILITY_THRESHOLD: f32 = 0.01;

    fn to_vector(&self) -> AnimationVector {
        smallvec![*self]
    }

    fn from_vector(vector: &[f32]) -> Self {
        vector.first().copied().unwrap_or_default()
    }
}

impl VectorConvertible for Dp {
    const VISIBILITY_THRESHOLD: f32 = 0.1;

    fn to_vector(&self) -> AnimationVector {
        smallvec![self.0]
    }

    fn from_vector(vector: &[f32]) -> Self {
        Dp(vector.first().copied().unwrap_or_default())
    }
}

impl VectorConvertible for Point {
    const VISIBILITY_THRESHOLD: f32 = 0.5;

    fn to_vector(&self) -> AnimationVector {
        smallvec![self.x, self.y]
    }

    fn from_vector(vector: &[f32]) -> Self {
        let component = |index: usize| vector.get(index).copied().unwrap_or_default();
        Point::new(component(0), component(1))
    }
}

impl VectorConvertible for Color {
    const VISIBILITY_THRESHOLD: f32 = 1.0 / 255.0;

    fn to_vector(&self) -> AnimationVector {
        smallvec![self.0, self.1, self.2, self.3]
    }

    // Springs overshoot; channels are clamped back into range.
    fn from_vector(vector: &[f32]) -> Self {
        let component = |index: usize| vector.get(index).copied().unwrap_or_default();
        Color(component(0), component(1), component(2), component(3)).clamped()
    }
}
