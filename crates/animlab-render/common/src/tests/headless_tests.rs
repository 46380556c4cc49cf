use super::*;
use animlab_ui::prelude::*;
use animlab_ui::{LayoutEngine, Rect, Size};

#[derive(Clone, Debug, PartialEq)]
enum Action {
    Outer,
    Inner,
}

const VIEWPORT: Size = Size::new(200.0, 200.0);

fn render(node: &Node<Action>) -> HeadlessRenderer<Action> {
    let layout = LayoutEngine::new(1.0)
        .expect("density")
        .compute_layout(node, VIEWPORT)
        .expect("layout");
    let mut renderer = HeadlessRenderer::new();
    renderer
        .rebuild_scene(&layout, VIEWPORT)
        .expect("render");
    renderer
}

#[test]
fn paints_backgrounds_before_text_and_children() {
    let tree = Box(
        Modifier::empty().size(dp(100.0)).background(Color::RED),
        BoxSpec::default(),
        vec![Text("hello", Modifier::empty(), TextStyle::default())],
    );

    let renderer = render(&tree);
    let scene = renderer.scene();
    assert_eq!(scene.shapes.len(), 1);
    assert_eq!(scene.shapes[0].rect, Rect::new(0.0, 0.0, 100.0, 100.0));
    let text = scene.find_text("hello").expect("text draw");
    assert!(text.z_index > scene.shapes[0].z_index);
    assert_eq!(text.color, Color::BLACK);
}

#[test]
fn alpha_is_folded_into_draw_colors() {
    let tree = Box(
        Modifier::empty()
            .alpha(0.5)
            .size(dp(50.0))
            .background(Color::BLUE),
        BoxSpec::default(),
        vec![Text("faded", Modifier::empty(), TextStyle::default())],
    );

    let renderer = render(&tree);
    let scene = renderer.scene();
    assert!((scene.shapes[0].color.a() - 0.5).abs() < 1e-6);
    let text = scene.find_text("faded").expect("text draw");
    assert!((text.color.a() - 0.5).abs() < 1e-6);
}

#[test]
fn transparent_draws_are_skipped() {
    let tree = Box(
        Modifier::empty()
            .alpha(0.0)
            .size(dp(50.0))
            .background(Color::BLUE),
        BoxSpec::default(),
        vec![Text("gone", Modifier::empty(), TextStyle::default())],
    );

    let renderer = render(&tree);
    assert!(renderer.scene().is_empty());
    assert!(renderer.scene().find_text("gone").is_none());
}

#[test]
fn hit_test_returns_topmost_first() {
    let tree = Box(
        Modifier::empty().size(dp(100.0)).clickable(Action::Outer),
        BoxSpec::default(),
        vec![Box(
            Modifier::empty().size(dp(40.0)).clickable(Action::Inner),
            BoxSpec::default(),
            vec![],
        )],
    );

    let renderer = render(&tree);
    let hits = renderer.scene().hit_test(10.0, 10.0);
    let actions: Vec<_> = hits.iter().map(|hit| hit.action.clone()).collect();
    assert_eq!(actions, vec![Action::Inner, Action::Outer]);

    let hits = renderer.scene().hit_test(80.0, 80.0);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].action, Action::Outer);

    assert!(renderer.scene().hit_test(150.0, 150.0).is_empty());
}

#[test]
fn rebuild_replaces_previous_frame() {
    let first = Box(
        Modifier::empty().size(dp(10.0)).background(Color::RED),
        BoxSpec::default(),
        vec![],
    );
    let mut renderer = render(&first);

    let second = Text("only text", Modifier::empty(), TextStyle::default());
    let layout = LayoutEngine::new(1.0)
        .expect("density")
        .compute_layout(&second, VIEWPORT)
        .expect("layout");
    renderer
        .rebuild_scene(&layout, VIEWPORT)
        .expect("render");

    let scene = renderer.scene();
    assert!(scene.shapes.is_empty());
    assert_eq!(scene.texts.len(), 1);
    assert_eq!(scene.texts[0].z_index, 0);
}

#[test]
fn invalid_viewport_is_rejected() {
    let tree = Spacer::<Action>(Modifier::empty());
    let layout = LayoutEngine::new(1.0)
        .expect("density")
        .compute_layout(&tree, VIEWPORT)
        .expect("layout");
    let mut renderer = HeadlessRenderer::new();
    let error = renderer
        .rebuild_scene(&layout, Size::new(f32::NAN, 10.0))
        .expect_err("nan viewport");
    assert!(matches!(error, RenderError::InvalidViewport { .. }));
}

#[test]
fn describe_lists_draws_in_paint_order() {
    let tree = Box(
        Modifier::empty().size(dp(100.0)).background(Color::WHITE),
        BoxSpec::default(),
        vec![Text("label", Modifier::empty(), TextStyle::default())],
    );

    let renderer = render(&tree);
    let description = renderer.scene().describe();
    let lines: Vec<_> = description.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("rect (0.0, 0.0) 100.0x100.0"));
    assert!(lines[1].starts_with("text \"label\""));
}

#[test]
fn action_at_picks_topmost_target() {
    let tree = Box(
        Modifier::empty().size(dp(100.0)).clickable(Action::Outer),
        BoxSpec::default(),
        vec![Box(
            Modifier::empty().size(dp(40.0)).clickable(Action::Inner),
            BoxSpec::default(),
            vec![],
        )],
    );

    let renderer = render(&tree);
    assert_eq!(renderer.scene().action_at(5.0, 5.0), Some(Action::Inner));
    assert_eq!(renderer.scene().action_at(60.0, 60.0), Some(Action::Outer));
    assert_eq!(renderer.scene().action_at(120.0, 5.0), None);
}
