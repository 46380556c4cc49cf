//! Animation system for animlab
//!
//! This crate provides animation primitives including tweens, springs, and
//! easing functions, the explicit [`Trajectory`] each binding follows, and
//! the visibility / content transitions built on top of them.

mod animatable;
mod content;
mod easing;
mod error;
mod spec;
mod spring;
mod trajectory;
mod vector;
mod visibility;

pub use animatable::Animatable;
pub use content::{ContentFrame, ContentTransition};
pub use easing::{CubicBezier, Easing};
pub use error::AnimationSpecError;
pub use spec::{AnimationSpec, SpringSpec, TweenSpec};
pub use spring::{SpringSimulation, MAX_SETTLE_SECONDS};
pub use trajectory::Trajectory;
pub use vector::{AnimationVector, VectorConvertible};
pub use visibility::{
    ContentTransform, EnterTransition, ExitTransition, VisibilityPhase, VisibilityTransition,
};

pub mod prelude {
    pub use crate::animatable::Animatable;
    pub use crate::content::ContentTransition;
    pub use crate::easing::Easing;
    pub use crate::spec::{AnimationSpec, SpringSpec, TweenSpec};
    pub use crate::visibility::{EnterTransition, ExitTransition, VisibilityTransition};
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
