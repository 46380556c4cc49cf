//! Closed-form damped harmonic oscillator.

use crate::SpringSpec;

/// Velocity threshold is the displacement threshold scaled to units per
/// second at 16 ms frames.
pub const VELOCITY_THRESHOLD_MULTIPLIER: f64 = 1000.0 / 16.0;

/// Hard cap on how long a spring may take to settle. A trajectory still
/// moving at the cap jumps to its target there.
pub const MAX_SETTLE_SECONDS: f64 = 60.0;

const SETTLE_STEP_SECONDS: f64 = 0.001;

/// Spring physics for a single component, expressed as displacement from
/// the rest position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSimulation {
    natural_freq: f64,
    damping_ratio: f64,
}

impl SpringSimulation {
    pub fn new(spec: &SpringSpec) -> Self {
        Self {
            natural_freq: (spec.stiffness() as f64).sqrt(),
            damping_ratio: spec.damping_ratio() as f64,
        }
    }

    /// Displacement and velocity `t` seconds after release from
    /// `initial_displacement` with `initial_velocity`.
    pub fn displacement_and_velocity(
        &self,
        initial_displacement: f64,
        initial_velocity: f64,
        t: f64,
    ) -> (f64, f64) {
        let x0 = initial_displacement;
        let v0 = initial_velocity;
        let omega = self.natural_freq;
        let zeta = self.damping_ratio;

        if zeta > 1.0 {
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let gamma_plus = -zeta * omega + root;
            let gamma_minus = -zeta * omega - root;
            let coeff_b = (gamma_minus * x0 - v0) / (gamma_minus - gamma_plus);
            let coeff_a = x0 - coeff_b;
            let exp_minus = (gamma_minus * t).exp();
            let exp_plus = (gamma_plus * t).exp();
            let displacement = coeff_a * exp_minus + coeff_b * exp_plus;
            let velocity = coeff_a * gamma_minus * exp_minus + coeff_b * gamma_plus * exp_plus;
            (displacement, velocity)
        } else if (zeta - 1.0).abs() < f64::EPSILON {
            let coeff_a = x0;
            let coeff_b = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let displacement = (coeff_a + coeff_b * t) * decay;
            let velocity = (coeff_a + coeff_b * t) * decay * -omega + coeff_b * decay;
            (displacement, velocity)
        } else {
            let damped_freq = omega * (1.0 - zeta * zeta).sqrt();
            let cos_coeff = x0;
            let sin_coeff = (zeta * omega * x0 + v0) / damped_freq;
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (damped_freq * t).sin_cos();
            let displacement = decay * (cos_coeff * cos + sin_coeff * sin);
            let velocity = displacement * -zeta * omega
                + decay * (-damped_freq * cos_coeff * sin + damped_freq * sin_coeff * cos);
            (displacement, velocity)
        }
    }

    /// Seconds until both displacement and velocity fall under their
    /// thresholds, capped at one minute.
    pub fn settle_seconds(
        &self,
        initial_displacement: f64,
        initial_velocity: f64,
        threshold: f64,
    ) -> f64 {
        let velocity_threshold = threshold * VELOCITY_THRESHOLD_MULTIPLIER;
        let mut t = 0.0;
        while t < MAX_SETTLE_SECONDS {
            let (x, v) = self.displacement_and_velocity(initial_displacement, initial_velocity, t);
            if x.abs() < threshold && v.abs() < velocity_threshold {
                return t;
            }
            t += SETTLE_STEP_SECONDS;
        }
        MAX_SETTLE_SECONDS
    }
}
