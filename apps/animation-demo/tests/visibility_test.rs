//! The visibility example fades the square out and back in.

use animation_demo::app::AnimatedVisibilityScreen;
use animlab_testing::prelude::*;
use animlab_ui::Color;
use robot_assertions::assert_approx_eq;

#[test]
fn hiding_fades_the_square_then_removes_it() {
    let mut rule = ScreenTestRule::new(AnimatedVisibilityScreen::new);
    rule.find_by_tag("visibility-box").assert_exists();
    rule.find_by_text("Ocultar").assert_exists();

    assert!(rule.find_by_text("Ocultar").click());
    assert!(!rule.screen().is_visible());
    rule.find_by_text("Mostrar").assert_exists();

    rule.advance_time_millis(100);
    let alpha = rule.find_by_tag("visibility-box").alpha().expect("still fading");
    assert!(alpha > 0.0 && alpha < 1.0, "mid-fade alpha {alpha}");

    rule.wait_for_idle();
    rule.find_by_tag("visibility-box").assert_not_exists();
    assert!(!rule.screen().square().is_on_screen());
    assert!(rule.scene().shapes.iter().all(|shape| shape.color != Color::BLUE));
}

#[test]
fn showing_again_restores_full_opacity() {
    let mut rule = ScreenTestRule::new(AnimatedVisibilityScreen::new);
    rule.find_by_text("Ocultar").click();
    rule.wait_for_idle();
    rule.find_by_text("Mostrar").click();
    rule.wait_for_idle();

    let alpha = rule.find_by_tag("visibility-box").alpha().expect("square shown");
    assert_approx_eq(alpha, 1.0, 1e-4, "square alpha");
    rule.find_by_text("Ocultar").assert_exists();
}

#[test]
fn toggling_mid_fade_reverses_from_the_current_alpha() {
    let mut rule = ScreenTestRule::new(AnimatedVisibilityScreen::new);
    rule.find_by_text("Ocultar").click();
    rule.advance_time_millis(80);
    let before = rule.find_by_tag("visibility-box").alpha().expect("fading");

    rule.find_by_text("Mostrar").click();
    let after = rule.find_by_tag("visibility-box").alpha().expect("reversing");
    assert!((after - before).abs() < 0.2, "jumped from {before} to {after}");

    rule.wait_for_idle();
    assert_approx_eq(
        rule.find_by_tag("visibility-box").alpha().expect("shown"),
        1.0,
        1e-4,
        "reversed alpha",
    );
}
