use super::*;

use animlab_core::{Runtime, RuntimeHandle, NANOS_PER_MILLI, NANOS_PER_SECOND};
use animlab_ui_graphics::{Color, Dp};

const FRAME_NANOS: u64 = 16 * NANOS_PER_MILLI;

/// Runs frames until no callback is pending. Returns the last frame time.
fn pump(handle: &RuntimeHandle, mut frame_time: u64) -> u64 {
    for _ in 0..10_000 {
        if !handle.has_frame_callbacks() {
            break;
        }
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
    }
    frame_time
}

#[test]
fn tween_animatable_interpolates_and_ends_at_target() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0f32, handle.clone());

    animatable.animate_to(1.0, AnimationSpec::tween(300));
    assert!(animatable.is_running());
    assert_eq!(animatable.value(), 0.0);

    let mut frame_time = 0u64;
    let mut saw_midpoint = false;
    for _ in 0..64 {
        if !handle.has_frame_callbacks() {
            break;
        }
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
        let value = animatable.value();
        if value > 0.0 && value < 1.0 {
            saw_midpoint = true;
        }
    }

    assert!(saw_midpoint, "animation should report intermediate values");
    assert_eq!(animatable.value(), 1.0);
    assert_eq!(animatable.state().get(), 1.0);
    assert!(!animatable.is_running());
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn animation_writes_invalidate_the_runtime() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    handle.take_invalidation();
    let animatable = Animatable::new(Dp(100.0), handle.clone());

    animatable.animate_to(Dp(200.0), AnimationSpec::tween(500));
    pump(&handle, 0);

    assert!(handle.take_invalidation());
    assert_eq!(animatable.value(), Dp(200.0));
}

#[test]
fn spring_animatable_converges_to_color_target() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(Color::RED, handle.clone());
    let spec = SpringSpec::new(
        SpringSpec::DAMPING_RATIO_MEDIUM_BOUNCY,
        SpringSpec::STIFFNESS_LOW,
    )
    .expect("valid spring");

    animatable.animate_to(Color::GREEN, spec.into());
    pump(&handle, 0);

    assert_eq!(animatable.value(), Color::GREEN);
    assert!(!animatable.is_running());
}

#[test]
fn animate_to_same_target_and_spec_is_a_no_op() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0f32, handle.clone());
    let spec = AnimationSpec::tween(200);

    animatable.animate_to(10.0, spec);
    let end = pump(&handle, 0);
    assert_eq!(animatable.value(), 10.0);

    animatable.animate_to(10.0, spec);
    assert!(!animatable.is_running());
    assert!(!handle.has_frame_callbacks());

    animatable.animate_to(10.0, AnimationSpec::tween(400));
    assert!(!animatable.is_running());
    assert_eq!(animatable.spec(), AnimationSpec::tween(400));

    animatable.animate_to(20.0, AnimationSpec::tween(400));
    pump(&handle, end);
    assert_eq!(animatable.value(), 20.0);
}

#[test]
fn retarget_mid_flight_does_not_jump() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0f32, handle.clone());
    let spec = AnimationSpec::Tween(TweenSpec::linear(500));
    let max_step = 100.0 * 16.0 / 500.0 + 1e-3;

    animatable.animate_to(100.0, spec);
    let mut frame_time = 0u64;
    for _ in 0..15 {
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
    }
    let before = animatable.value();
    assert!(before > 10.0 && before < 90.0, "mid flight, got {before}");

    animatable.animate_to(0.0, spec);
    let mut previous = before;
    for _ in 0..5 {
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
        let value = animatable.value();
        assert!(
            (value - previous).abs() <= max_step,
            "jumped from {previous} to {value}"
        );
        assert!(value <= before, "should head back toward 0, got {value}");
        previous = value;
    }

    pump(&handle, frame_time);
    assert_eq!(animatable.value(), 0.0);
}

#[test]
fn snap_to_cancels_running_animation() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0f32, handle.clone());

    animatable.animate_to(50.0, AnimationSpec::tween(300));
    handle.drain_frame_callbacks(FRAME_NANOS);
    animatable.snap_to(5.0);

    assert_eq!(animatable.value(), 5.0);
    assert_eq!(animatable.target(), 5.0);
    assert_eq!(animatable.state().get(), 5.0);
    assert!(!animatable.is_running());
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn dropping_animatable_cancels_frame_callback() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0f32, handle.clone());

    animatable.animate_to(1.0, AnimationSpec::tween(300));
    assert!(handle.has_frame_callbacks());
    drop(animatable);

    assert!(!handle.has_frame_callbacks());
}

#[test]
fn zero_duration_tween_lands_on_first_frame() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0f32, handle.clone());

    animatable.animate_to(3.0, AnimationSpec::tween(0));
    handle.drain_frame_callbacks(FRAME_NANOS);

    assert_eq!(animatable.value(), 3.0);
    assert!(!animatable.is_running());
}

#[test]
fn tween_trajectory_holds_start_during_delay() {
    let spec = TweenSpec::linear(100).with_delay(50);
    let trajectory = Trajectory::new(Dp(0.0), Dp(100.0), spec.into(), 0);

    assert_eq!(trajectory.duration_nanos(), 150 * NANOS_PER_MILLI);
    assert_eq!(trajectory.value_at(40 * NANOS_PER_MILLI), Dp(0.0));
    let halfway = trajectory.value_at(100 * NANOS_PER_MILLI);
    assert!((halfway.0 - 50.0).abs() < 0.01, "got {halfway:?}");
    assert_eq!(trajectory.value_at(150 * NANOS_PER_MILLI), Dp(100.0));
    assert!(trajectory.is_finished_at(150 * NANOS_PER_MILLI));
}

#[test]
fn tween_velocity_matches_linear_slope() {
    let trajectory = Trajectory::new(
        0.0f32,
        100.0,
        TweenSpec::linear(1_000).into(),
        0,
    );

    let velocity = trajectory.velocity_at(500 * NANOS_PER_MILLI);
    assert!((velocity[0] - 100.0).abs() < 0.5, "got {velocity:?}");
    assert_eq!(trajectory.velocity_at(2_000 * NANOS_PER_MILLI)[0], 0.0);
}

#[test]
fn underdamped_spring_overshoots_target() {
    let spec = SpringSpec::new(SpringSpec::DAMPING_RATIO_HIGH_BOUNCY, 400.0).expect("valid");
    let trajectory = Trajectory::new(0.0f32, 1.0, spec.into(), 0);

    let peak = (0..2_000u64)
        .map(|ms| trajectory.value_at(ms * NANOS_PER_MILLI))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.2, "expected overshoot, peak was {peak}");
}

#[test]
fn critically_damped_spring_never_overshoots() {
    let trajectory = Trajectory::new(0.0f32, 1.0, SpringSpec::default().into(), 0);

    for ms in 0..1_000u64 {
        let value = trajectory.value_at(ms * NANOS_PER_MILLI);
        assert!(value <= 1.0 + 1e-4, "overshot at {ms}ms: {value}");
    }
}

#[test]
fn spring_trajectory_settles_on_target() {
    let trajectory = Trajectory::new(0.0f32, 100.0, SpringSpec::bouncy().into(), 0);
    let end = trajectory.end_nanos();

    assert!(end > 0);
    assert!(end < 60 * NANOS_PER_SECOND);
    assert!(!trajectory.is_finished_at(end - 1));
    assert_eq!(trajectory.value_at(end), 100.0);
    let near_end = trajectory.value_at(end - NANOS_PER_MILLI);
    assert!((near_end - 100.0).abs() < f32::VISIBILITY_THRESHOLD * 2.0);
}

#[test]
fn very_soft_spring_is_capped_and_snaps_at_the_cap() {
    let soft = SpringSpec::new(SpringSpec::DAMPING_RATIO_NO_BOUNCY, 0.01).expect("valid");
    let trajectory = Trajectory::new(0.0f32, 100.0, soft.into(), 0);
    let cap = (MAX_SETTLE_SECONDS * NANOS_PER_SECOND as f64) as u64;

    assert_eq!(trajectory.duration_nanos(), cap);
    assert!(trajectory.value_at(cap - NANOS_PER_MILLI) < 99.0);
    assert_eq!(trajectory.value_at(cap), 100.0);
}

#[test]
fn spring_at_rest_on_target_is_finished_immediately() {
    let trajectory = Trajectory::new(5.0f32, 5.0, SpringSpec::bouncy().into(), 10);
    assert_eq!(trajectory.duration_nanos(), 0);
    assert!(trajectory.is_finished_at(10));
}

#[test]
fn retarget_keeps_position_and_spring_velocity() {
    let spring: AnimationSpec = SpringSpec::default().into();
    let trajectory = Trajectory::new(0.0f32, 1.0, spring, 0);
    let now = 50 * NANOS_PER_MILLI;

    let retargeted = trajectory.retarget(now, 2.0, spring);

    assert_eq!(retargeted.start_nanos(), now);
    assert!((retargeted.value_at(now) - trajectory.value_at(now)).abs() < 1e-4);
    let before = trajectory.velocity_at(now)[0];
    let after = retargeted.velocity_at(now)[0];
    assert!(before > 0.0);
    assert!((before - after).abs() < 1e-2 * before.abs().max(1.0));
    assert_eq!(retargeted.target(), &2.0);
}

#[test]
fn color_vector_is_clamped_when_sampled() {
    let color = Color::from_vector(&[1.2, -0.1, 0.5, 1.0]);
    assert_eq!(color, Color(1.0, 0.0, 0.5, 1.0));
}

#[test]
fn spring_spec_rejects_invalid_configuration() {
    assert_eq!(
        SpringSpec::new(0.0, 400.0),
        Err(AnimationSpecError::InvalidDampingRatio(0.0))
    );
    assert_eq!(
        SpringSpec::new(1.0, -5.0),
        Err(AnimationSpecError::InvalidStiffness(-5.0))
    );
    assert!(matches!(
        SpringSpec::default().with_visibility_threshold(f32::NAN),
        Err(AnimationSpecError::InvalidThreshold(_))
    ));
    let custom = SpringSpec::default()
        .with_visibility_threshold(0.5)
        .expect("positive threshold");
    assert_eq!(custom.visibility_threshold(), Some(0.5));
}

#[test]
fn tween_and_bezier_reject_invalid_configuration() {
    assert!(matches!(
        TweenSpec::from_secs_f32(-1.0, Easing::LinearEasing),
        Err(AnimationSpecError::InvalidDuration(_))
    ));
    let tween = TweenSpec::from_secs_f32(0.25, Easing::LinearEasing).expect("valid");
    assert_eq!(tween.duration_millis, 250);

    assert!(CubicBezier::new(1.5, 0.0, 0.5, 1.0).is_err());
    assert!(CubicBezier::new(0.2, -0.5, 0.8, 1.5).is_ok());
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let custom = CubicBezier::new(0.3, 0.0, 0.7, 1.0).expect("valid curve");
    let easings = [
        Easing::LinearEasing,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
        Easing::Cubic(custom),
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!(start.abs() < 0.01, "Start should be ~0 for {:?}", easing);
        assert!((end - 1.0).abs() < 0.01, "End should be ~1 for {:?}", easing);
    }
}

#[test]
fn tween_spec_default_has_reasonable_values() {
    let spec = TweenSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn spring_spec_presets() {
    assert_eq!(SpringSpec::default().damping_ratio(), 1.0);
    assert!(SpringSpec::bouncy().damping_ratio() < 1.0);
    assert!(SpringSpec::stiff().stiffness() > SpringSpec::default().stiffness());
    assert!(AnimationSpec::default().is_spring());
}
