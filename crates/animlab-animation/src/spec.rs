use animlab_core::NANOS_PER_MILLI;

use crate::{AnimationSpecError, Easing};

/// Duration-based animation: duration, easing and an optional delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl TweenSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Create a tween from a duration in seconds, rejecting negative or
    /// non-finite values.
    pub fn from_secs_f32(seconds: f32, easing: Easing) -> Result<Self, AnimationSpecError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(AnimationSpecError::InvalidDuration(seconds));
        }
        Ok(Self::tween((seconds * 1000.0).round() as u64, easing))
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    pub fn duration_nanos(&self) -> u64 {
        self.duration_millis * NANOS_PER_MILLI
    }

    pub fn delay_nanos(&self) -> u64 {
        self.delay_millis * NANOS_PER_MILLI
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    stiffness: f32,
    /// Displacement below which the spring counts as settled. `None` uses
    /// the animated type's own threshold.
    visibility_threshold: Option<f32>,
}

impl SpringSpec {
    pub const DAMPING_RATIO_HIGH_BOUNCY: f32 = 0.2;
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
    pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

    pub const STIFFNESS_HIGH: f32 = 10_000.0;
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;
    pub const STIFFNESS_LOW: f32 = 200.0;
    pub const STIFFNESS_VERY_LOW: f32 = 50.0;

    /// Any positive finite damping ratio and stiffness is accepted. Springs
    /// soft enough to still be moving after [`MAX_SETTLE_SECONDS`] finish
    /// there by snapping to the target.
    ///
    /// [`MAX_SETTLE_SECONDS`]: crate::MAX_SETTLE_SECONDS
    pub fn new(damping_ratio: f32, stiffness: f32) -> Result<Self, AnimationSpecError> {
        if !damping_ratio.is_finite() || damping_ratio <= 0.0 {
            return Err(AnimationSpecError::InvalidDampingRatio(damping_ratio));
        }
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(AnimationSpecError::InvalidStiffness(stiffness));
        }
        Ok(Self {
            damping_ratio,
            stiffness,
            visibility_threshold: None,
        })
    }

    /// Override the settle threshold.
    pub fn with_visibility_threshold(mut self, threshold: f32) -> Result<Self, AnimationSpecError> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(AnimationSpecError::InvalidThreshold(threshold));
        }
        self.visibility_threshold = Some(threshold);
        Ok(self)
    }

    /// Create a spring with default material design values.
    pub const fn default_spring() -> Self {
        Self::preset(Self::DAMPING_RATIO_NO_BOUNCY, Self::STIFFNESS_MEDIUM)
    }

    /// Create a bouncy spring.
    pub const fn bouncy() -> Self {
        Self::preset(Self::DAMPING_RATIO_MEDIUM_BOUNCY, Self::STIFFNESS_MEDIUM)
    }

    /// Create a bouncy spring with low stiffness.
    pub const fn bouncy_soft() -> Self {
        Self::preset(Self::DAMPING_RATIO_MEDIUM_BOUNCY, Self::STIFFNESS_LOW)
    }

    /// Create a stiff spring (fast, no bounce).
    pub const fn stiff() -> Self {
        Self::preset(Self::DAMPING_RATIO_NO_BOUNCY, 3_000.0)
    }

    pub(crate) const fn preset(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            visibility_threshold: None,
        }
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping_ratio
    }

    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    pub fn visibility_threshold(&self) -> Option<f32> {
        self.visibility_threshold
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// How a binding moves toward its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationSpec {
    /// Time-based tween animation.
    Tween(TweenSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64) -> Self {
        AnimationSpec::Tween(TweenSpec::tween(duration_millis, Easing::FastOutSlowInEasing))
    }

    pub fn spring(spec: SpringSpec) -> Self {
        AnimationSpec::Spring(spec)
    }

    pub fn is_spring(&self) -> bool {
        matches!(self, AnimationSpec::Spring(_))
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        AnimationSpec::Spring(SpringSpec::default())
    }
}

impl From<TweenSpec> for AnimationSpec {
    fn from(spec: TweenSpec) -> Self {
        AnimationSpec::Tween(spec)
    }
}

impl From<SpringSpec> for AnimationSpec {
    fn from(spec: SpringSpec) -> Self {
        AnimationSpec::Spring(spec)
    }
}
