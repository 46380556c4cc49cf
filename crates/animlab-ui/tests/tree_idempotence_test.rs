//! Building and laying out a tree twice from the same inputs must give the
//! same result.

use animlab_ui::*;

#[derive(Clone, Debug, PartialEq)]
enum Action {
    Toggle,
}

fn card(expanded: bool, alpha: f32) -> Node<Action> {
    let size = if expanded { dp(200.0) } else { dp(100.0) };
    Column(
        Modifier::empty().fill_max_size().padding(dp(16.0)),
        ColumnSpec::new().horizontal_alignment(HorizontalAlignment::CenterHorizontally),
        vec![
            Box(
                Modifier::empty()
                    .size(size)
                    .background(Color::CYAN)
                    .alpha(alpha)
                    .clickable(Action::Toggle),
                BoxSpec::default(),
                vec![],
            ),
            Spacer(Modifier::empty().height(dp(24.0))),
            Button(
                Modifier::empty(),
                ButtonSpec::default(),
                Action::Toggle,
                vec![Text("Toggle", Modifier::empty(), TextStyle::default())],
            ),
        ],
    )
}

#[test]
fn same_inputs_give_equal_trees_and_layouts() {
    let engine = LayoutEngine::new(1.0).expect("density");
    let viewport = Size::new(412.0, 915.0);

    let first = card(true, 0.5);
    let second = card(true, 0.5);
    assert_eq!(first, second);

    let first_layout = engine.compute_layout(&first, viewport).expect("layout");
    let second_layout = engine.compute_layout(&second, viewport).expect("layout");
    assert_eq!(first_layout, second_layout);
    assert_eq!(format_layout_tree(&first_layout), format_layout_tree(&second_layout));
}

#[test]
fn different_inputs_give_different_trees() {
    assert_ne!(card(true, 1.0), card(false, 1.0));
    assert_ne!(card(true, 1.0), card(true, 0.9));
}

#[test]
fn node_tree_dump_lists_modifier_chain() {
    let dump = format_node_tree(&card(false, 1.0));
    assert!(dump.starts_with("Column [fill -> padding(16.0, 16.0, 16.0, 16.0)]"));
    assert!(dump.contains("clickable(Toggle)"));
    assert!(dump.contains("Text \"Toggle\""));
}

#[test]
fn layout_dump_and_queries_find_content() {
    let engine = LayoutEngine::new(1.0).expect("density");
    let layout = engine
        .compute_layout(&card(false, 1.0), Size::new(412.0, 915.0))
        .expect("layout");

    let dump = format_layout_tree(&layout);
    assert!(dump.contains("Text pos:"));
    assert!(dump.contains("\"Toggle\""));
    assert_eq!(layout.node_count(), 5);
    assert!(layout.find_text("Toggle").is_some());
    assert_eq!(
        layout.clickable_for_text("Toggle").map(|t| &t.action),
        Some(&Action::Toggle)
    );
}
