//! Color and size/position examples settle on their targets.

use animation_demo::app::{AnimateColorScreen, AnimateSizeAndPositionScreen};
use animlab_testing::prelude::*;
use animlab_ui::{dp, Color};
use robot_assertions::{assert_approx_eq, assert_color_approx_eq};

#[test]
fn color_springs_from_red_to_green_and_back() {
    let mut rule = ScreenTestRule::new(AnimateColorScreen::new);
    assert_eq!(rule.find_by_tag("color-box").color(), Some(Color::RED));

    rule.find_by_text("Cambiar color").click();
    rule.advance_time_millis(50);
    let mid = rule.find_by_tag("color-box").color().expect("box");
    assert_ne!(mid, Color::RED);
    assert_ne!(mid, Color::GREEN);

    rule.wait_for_idle();
    assert_color_approx_eq(
        rule.find_by_tag("color-box").color().expect("box"),
        Color::GREEN,
        1e-4,
        "settled color",
    );
    assert!(!rule.screen().color().is_running());

    rule.find_by_text("Cambiar color").click();
    rule.wait_for_idle();
    assert_color_approx_eq(rule.screen().color().value(), Color::RED, 1e-4, "back to red");
}

#[test]
fn expanding_grows_and_lifts_the_square() {
    let mut rule = ScreenTestRule::new(AnimateSizeAndPositionScreen::new);
    assert_approx_eq(
        rule.find_by_tag("size-box").width().expect("box"),
        100.0,
        1e-3,
        "initial width",
    );

    rule.find_by_text("Animar cuadro").click();
    rule.advance_time_millis(300);
    let width = rule.find_by_tag("size-box").width().expect("box");
    assert!(width > 100.0 && width < 200.0, "mid-animation width {width}");

    rule.wait_for_idle();
    assert_eq!(rule.screen().size().value(), dp(200.0));
    assert_eq!(rule.screen().offset_y().value(), dp(-150.0));
    assert_approx_eq(
        rule.find_by_tag("size-box").width().expect("box"),
        200.0,
        1e-3,
        "expanded width",
    );
}

#[test]
fn offset_moves_the_painted_square_not_its_slot() {
    let mut rule = ScreenTestRule::new(AnimateSizeAndPositionScreen::new);
    rule.find_by_text("Animar cuadro").click();
    rule.wait_for_idle();

    let layout = rule.layout_tree().expect("layout");
    let square = layout.find_by_tag("size-box").expect("box");
    let painted = square.backgrounds.last().expect("background").rect;
    assert_approx_eq(painted.y, square.rect.y - 150.0, 1e-3, "painted y");
    assert_approx_eq(painted.height, 200.0, 1e-3, "painted height");
}
