use super::*;
use crate::modifier::Modifier;
use crate::node::{Node, TextStyle};
use crate::text::TextMetrics;
use crate::widgets::*;
use animlab_ui_graphics::{dp, sp, Color, Rect, Size};
use animlab_ui_layout::{Alignment, HorizontalAlignment, LinearArrangement};

#[derive(Clone, Debug, PartialEq)]
enum Action {
    Tap,
    Press(u8),
}

const VIEWPORT: Size = Size::new(400.0, 800.0);

fn layout(node: &Node<Action>) -> LayoutTree<Action> {
    LayoutEngine::new(1.0)
        .expect("density")
        .compute_layout(node, VIEWPORT)
        .expect("layout")
}

#[test]
fn size_then_padding_constrains_child() {
    let tree = Box(
        Modifier::empty().size(dp(100.0)).padding(dp(15.0)),
        BoxSpec::default(),
        vec![Box(
            Modifier::empty().size(dp(50.0)),
            BoxSpec::default(),
            vec![],
        )],
    );

    let layout = layout(&tree);
    let root = layout.root();
    assert_eq!(root.rect, Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(root.content_rect, Rect::new(15.0, 15.0, 70.0, 70.0));
    assert_eq!(root.children[0].rect, Rect::new(15.0, 15.0, 50.0, 50.0));
}

#[test]
fn column_stacks_with_spacing_and_alignment() {
    let tree = Column(
        Modifier::empty().fill_max_width(),
        ColumnSpec::new()
            .vertical_arrangement(LinearArrangement::spaced_by(8.0))
            .horizontal_alignment(HorizontalAlignment::CenterHorizontally),
        vec![
            Spacer(Modifier::empty().size_wh(dp(100.0), dp(20.0))),
            Spacer(Modifier::empty().size_wh(dp(200.0), dp(30.0))),
        ],
    );

    let layout = layout(&tree);
    let root = layout.root();
    assert_eq!(root.rect.size(), Size::new(400.0, 58.0));
    assert_eq!(root.children[0].rect, Rect::new(150.0, 0.0, 100.0, 20.0));
    assert_eq!(root.children[1].rect, Rect::new(100.0, 28.0, 200.0, 30.0));
}

#[test]
fn row_places_children_left_to_right() {
    let tree = Row(
        Modifier::empty(),
        RowSpec::new().horizontal_arrangement(LinearArrangement::spaced_by(8.0)),
        vec![
            Spacer(Modifier::empty().size(dp(10.0))),
            Spacer(Modifier::empty().size(dp(20.0))),
        ],
    );

    let layout = layout(&tree);
    let root = layout.root();
    assert_eq!(root.rect.size(), Size::new(38.0, 20.0));
    assert_eq!(root.children[1].rect.x, 18.0);
}

#[test]
fn offset_moves_content_but_not_bounds() {
    let tree = Box(
        Modifier::empty()
            .offset(dp(200.0), dp(-150.0))
            .size(dp(100.0))
            .background(Color::RED)
            .clickable(Action::Tap),
        BoxSpec::default(),
        vec![],
    );

    let layout = layout(&tree);
    let root = layout.root();
    assert_eq!(root.rect, Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(root.content_rect, Rect::new(200.0, -150.0, 100.0, 100.0));
    assert_eq!(root.backgrounds[0].rect, root.content_rect);
    assert_eq!(layout.hit_test(250.0, -100.0).map(|t| &t.action), Some(&Action::Tap));
    assert!(layout.hit_test(50.0, 50.0).is_none());
}

#[test]
fn background_before_padding_covers_padding() {
    let tree: Node<Action> = Box(
        Modifier::empty()
            .background(Color::BLUE)
            .padding(dp(10.0))
            .background(Color::RED)
            .size(dp(20.0)),
        BoxSpec::default(),
        vec![],
    );

    let layout = layout(&tree);
    let backgrounds = &layout.root().backgrounds;
    assert_eq!(backgrounds[0].rect, Rect::new(0.0, 0.0, 40.0, 40.0));
    assert_eq!(backgrounds[1].rect, Rect::new(10.0, 10.0, 20.0, 20.0));
}

#[test]
fn alpha_multiplies_down_the_tree() {
    let tree: Node<Action> = Box(
        Modifier::empty().background(Color::WHITE).alpha(0.5),
        BoxSpec::default(),
        vec![Text(
            "faded",
            Modifier::empty().alpha(0.5),
            TextStyle::default(),
        )],
    );

    let layout = layout(&tree);
    let root = layout.root();
    assert_eq!(root.backgrounds[0].alpha, 1.0);
    assert_eq!(root.alpha, 0.5);
    assert_eq!(root.children[0].alpha, 0.25);
}

#[test]
fn monospaced_text_is_measured_from_font_size() {
    let tree: Node<Action> = Text(
        "Hola",
        Modifier::empty(),
        TextStyle::default().with_font_size(sp(20.0)),
    );

    let layout = layout(&tree);
    let text = layout.root().text.as_ref().expect("text layout");
    assert!((text.rect.width - 48.0).abs() < 1e-3);
    assert!((text.rect.height - 24.0).abs() < 1e-3);
    assert_eq!(text.font_size_px, 20.0);
}

#[test]
fn button_pads_content_and_meets_minimum_height() {
    let tree = Button(
        Modifier::empty(),
        ButtonSpec::default(),
        Action::Tap,
        vec![Text("Ok", Modifier::empty(), TextStyle::default().with_font_size(sp(10.0)))],
    );

    let layout = layout(&tree);
    let root = layout.root();
    // "Ok" is 12x12 and the minimum height centers it vertically.
    let close = |a: f32, b: f32| (a - b).abs() < 1e-3;
    assert!(close(root.rect.width, 60.0));
    assert!(close(root.rect.height, 40.0));
    let label = &root.children[0].rect;
    assert!(close(label.x, 24.0));
    assert!(close(label.y, 14.0));
    assert_eq!(root.backgrounds[0].color, ButtonSpec::DEFAULT_CONTAINER_COLOR);
    assert_eq!(
        layout.clickable_for_text("Ok").map(|t| &t.action),
        Some(&Action::Tap)
    );
}

#[test]
fn surface_fills_and_propagates_min_constraints() {
    let tree: Node<Action> = Surface(
        Modifier::empty().fill_max_size(),
        SurfaceSpec::new(Color::BLACK),
        vec![Column(Modifier::empty(), ColumnSpec::default(), vec![])],
    );

    let layout = layout(&tree);
    let root = layout.root();
    assert_eq!(root.rect.size(), VIEWPORT);
    assert_eq!(root.children[0].rect.size(), VIEWPORT);
    assert_eq!(root.backgrounds[0].color, Color::BLACK);
}

#[test]
fn box_aligns_children() {
    let tree: Node<Action> = Box(
        Modifier::empty().size(dp(100.0)),
        BoxSpec::new().content_alignment(Alignment::CENTER),
        vec![Spacer(Modifier::empty().size(dp(40.0)))],
    );

    let layout = layout(&tree);
    assert_eq!(
        layout.root().children[0].rect,
        Rect::new(30.0, 30.0, 40.0, 40.0)
    );
}

#[test]
fn later_siblings_win_hit_tests() {
    let tree = Box(
        Modifier::empty().size(dp(100.0)).clickable(Action::Press(0)),
        BoxSpec::default(),
        vec![
            Box(
                Modifier::empty().size(dp(50.0)).clickable(Action::Press(1)),
                BoxSpec::default(),
                vec![],
            ),
            Box(
                Modifier::empty().size(dp(50.0)).clickable(Action::Press(2)),
                BoxSpec::default(),
                vec![],
            ),
        ],
    );

    let layout = layout(&tree);
    assert_eq!(layout.hit_test(10.0, 10.0).map(|t| &t.action), Some(&Action::Press(2)));
    assert_eq!(layout.hit_test(80.0, 80.0).map(|t| &t.action), Some(&Action::Press(0)));
    assert!(layout.hit_test(150.0, 10.0).is_none());
}

#[test]
fn density_scales_dp() {
    let tree: Node<Action> = Spacer(Modifier::empty().size(dp(10.0)).test_tag("gap"));

    let layout = LayoutEngine::new(2.5)
        .expect("density")
        .compute_layout(&tree, VIEWPORT)
        .expect("layout");

    let gap = layout.find_by_tag("gap").expect("tagged");
    assert_eq!(gap.rect.size(), Size::new(25.0, 25.0));
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(
        LayoutEngine::new(0.0).err(),
        Some(LayoutError::InvalidDensity(0.0))
    );
    let tree: Node<Action> = Spacer(Modifier::empty());
    let result = LayoutEngine::new(1.0)
        .expect("density")
        .compute_layout(&tree, Size::new(f32::INFINITY, 10.0));
    assert!(matches!(result, Err(LayoutError::InvalidViewport { .. })));
}

#[test]
fn non_finite_lengths_are_errors() {
    let engine = LayoutEngine::new(1.0).expect("density");
    let viewport = Size::new(100.0, 100.0);

    let sized: Node<Action> = Box(
        Modifier::empty().size(dp(f32::NAN)),
        BoxSpec::default(),
        vec![],
    );
    assert!(matches!(
        engine.compute_layout(&sized, viewport),
        Err(LayoutError::NonFiniteLength { kind: "size", .. })
    ));

    let nested: Node<Action> = Column(
        Modifier::empty(),
        ColumnSpec::default(),
        vec![Spacer(Modifier::empty().offset(dp(0.0), dp(f32::INFINITY)))],
    );
    assert!(matches!(
        engine.compute_layout(&nested, viewport),
        Err(LayoutError::NonFiniteLength { kind: "offset", .. })
    ));

    let padded: Node<Action> = Spacer(Modifier::empty().padding(dp(f32::NAN)));
    assert!(matches!(
        engine.compute_layout(&padded, viewport),
        Err(LayoutError::NonFiniteLength { kind: "padding", .. })
    ));
}

struct FixedMeasurer;

impl crate::text::TextMeasurer for FixedMeasurer {
    fn measure(&self, _text: &str, _font_size_px: f32) -> TextMetrics {
        TextMetrics {
            width: 7.0,
            height: 3.0,
            line_height: 3.0,
            line_count: 1,
        }
    }
}

#[test]
fn custom_measurer_is_used() {
    let tree: Node<Action> = Text("anything", Modifier::empty(), TextStyle::default());
    let layout = LayoutEngine::new(1.0)
        .expect("density")
        .with_measurer(FixedMeasurer)
        .compute_layout(&tree, VIEWPORT)
        .expect("layout");

    assert_eq!(layout.root().rect.size(), Size::new(7.0, 3.0));
}
