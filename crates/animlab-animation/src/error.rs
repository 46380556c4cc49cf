use thiserror::Error;

/// Invalid animation configuration, rejected when the spec is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationSpecError {
    #[error("spring damping ratio must be positive and finite, got {0}")]
    InvalidDampingRatio(f32),
    #[error("spring stiffness must be positive and finite, got {0}")]
    InvalidStiffness(f32),
    #[error("visibility threshold must be positive and finite, got {0}")]
    InvalidThreshold(f32),
    #[error("tween duration must be finite and non-negative, got {0}s")]
    InvalidDuration(f32),
    #[error("cubic bezier x control points must lie in [0, 1], got x1={x1}, x2={x2}")]
    InvalidBezier { x1: f32, x2: f32 },
}
