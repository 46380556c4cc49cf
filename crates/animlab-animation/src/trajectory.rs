use animlab_core::{NANOS_PER_MILLI, NANOS_PER_SECOND};
use smallvec::smallvec;

use crate::spring::SpringSimulation;
use crate::{AnimationSpec, AnimationVector, VectorConvertible};

/// The path one binding follows from a start value toward a target.
///
/// A trajectory is a plain value: it stores where it started, when, how
/// fast, where it is going and under which curve. Sampling never mutates it,
/// and retargeting produces a new trajectory that starts from the sampled
/// position so motion stays continuous.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<T: VectorConvertible> {
    start_value: T,
    target_value: T,
    start: AnimationVector,
    target: AnimationVector,
    start_velocity: AnimationVector,
    start_nanos: u64,
    spec: AnimationSpec,
    duration_nanos: u64,
}

impl<T: VectorConvertible> Trajectory<T> {
    pub fn new(start: T, target: T, spec: AnimationSpec, start_nanos: u64) -> Self {
        let components = start.to_vector().len();
        Self::with_initial_velocity(start, smallvec![0.0; components], target, spec, start_nanos)
    }

    /// Starts with `velocity` (units per second per component). Tweens ignore
    /// the initial velocity.
    pub fn with_initial_velocity(
        start_value: T,
        velocity: AnimationVector,
        target_value: T,
        spec: AnimationSpec,
        start_nanos: u64,
    ) -> Self {
        let start = start_value.to_vector();
        let target = target_value.to_vector();
        let mut start_velocity = velocity;
        start_velocity.resize(start.len(), 0.0);
        let duration_nanos = match spec {
            AnimationSpec::Tween(tween) => tween.delay_nanos() + tween.duration_nanos(),
            AnimationSpec::Spring(spring) => {
                let simulation = SpringSimulation::new(&spring);
                let threshold = spring
                    .visibility_threshold()
                    .unwrap_or(T::VISIBILITY_THRESHOLD) as f64;
                let settle = start
                    .iter()
                    .zip(target.iter())
                    .zip(start_velocity.iter())
                    .map(|((s, t), v)| {
                        simulation.settle_seconds((s - t) as f64, *v as f64, threshold)
                    })
                    .fold(0.0f64, f64::max);
                (settle * NANOS_PER_SECOND as f64).round() as u64
            }
        };
        Self {
            start_value,
            target_value,
            start,
            target,
            start_velocity,
            start_nanos,
            spec,
            duration_nanos,
        }
    }

    pub fn start_value(&self) -> &T {
        &self.start_value
    }

    pub fn target(&self) -> &T {
        &self.target_value
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn start_nanos(&self) -> u64 {
        self.start_nanos
    }

    /// Time from start until the value rests on the target.
    pub fn duration_nanos(&self) -> u64 {
        self.duration_nanos
    }

    pub fn end_nanos(&self) -> u64 {
        self.start_nanos.saturating_add(self.duration_nanos)
    }

    pub fn is_finished_at(&self, now_nanos: u64) -> bool {
        now_nanos >= self.end_nanos()
    }

    pub fn value_at(&self, now_nanos: u64) -> T {
        if self.is_finished_at(now_nanos) {
            return self.target_value.clone();
        }
        T::from_vector(&self.vector_at(now_nanos))
    }

    /// Velocity in units per second per component.
    pub fn velocity_at(&self, now_nanos: u64) -> AnimationVector {
        if self.is_finished_at(now_nanos) {
            return smallvec![0.0; self.start.len()];
        }
        match self.spec {
            AnimationSpec::Spring(spring) => {
                let simulation = SpringSimulation::new(&spring);
                let t = self.elapsed_seconds(now_nanos);
                self.start
                    .iter()
                    .zip(self.target.iter())
                    .zip(self.start_velocity.iter())
                    .map(|((s, target), v)| {
                        let (_, velocity) =
                            simulation.displacement_and_velocity((s - target) as f64, *v as f64, t);
                        velocity as f32
                    })
                    .collect()
            }
            AnimationSpec::Tween(_) => {
                // Backward difference over one millisecond.
                let elapsed = now_nanos.saturating_sub(self.start_nanos);
                let step = elapsed.min(NANOS_PER_MILLI);
                if step == 0 {
                    return smallvec![0.0; self.start.len()];
                }
                let now = self.vector_at(now_nanos);
                let before = self.vector_at(now_nanos - step);
                let seconds = step as f32 / NANOS_PER_SECOND as f32;
                now.iter()
                    .zip(before.iter())
                    .map(|(a, b)| (a - b) / seconds)
                    .collect()
            }
        }
    }

    /// A new trajectory toward `target` that starts where this one is at
    /// `now_nanos`, carrying its velocity.
    pub fn retarget(&self, now_nanos: u64, target: T, spec: AnimationSpec) -> Trajectory<T> {
        let value = self.value_at(now_nanos);
        let velocity = self.velocity_at(now_nanos);
        Trajectory::with_initial_velocity(value, velocity, target, spec, now_nanos)
    }

    fn elapsed_seconds(&self, now_nanos: u64) -> f64 {
        now_nanos.saturating_sub(self.start_nanos) as f64 / NANOS_PER_SECOND as f64
    }

    fn vector_at(&self, now_nanos: u64) -> AnimationVector {
        match self.spec {
            AnimationSpec::Tween(tween) => {
                let elapsed = now_nanos.saturating_sub(self.start_nanos);
                let delay = tween.delay_nanos();
                if elapsed < delay {
                    return self.start.clone();
                }
                let duration = tween.duration_nanos().max(1);
                let linear = ((elapsed - delay) as f32 / duration as f32).clamp(0.0, 1.0);
                let progress = tween.easing.transform(linear);
                self.start
                    .iter()
                    .zip(self.target.iter())
                    .map(|(s, t)| s + (t - s) * progress)
                    .collect()
            }
            AnimationSpec::Spring(spring) => {
                let simulation = SpringSimulation::new(&spring);
                let t = self.elapsed_seconds(now_nanos);
                self.start
                    .iter()
                    .zip(self.target.iter())
                    .zip(self.start_velocity.iter())
                    .map(|((s, target), v)| {
                        let (displacement, _) =
                            simulation.displacement_and_velocity((s - target) as f64, *v as f64, t);
                        target + displacement as f32
                    })
                    .collect()
            }
        }
    }
}
