//! Debug utilities for inspecting the current screen state
//!
//! Both the description tree and its layout can be dumped as indented text,
//! one node per line.

use std::fmt::{Debug, Write};

use crate::layout::{LayoutBox, LayoutTree};
use crate::modifier::ModifierElement;
use crate::node::{Node, NodeKind};

/// Logs the layout tree at debug level, one line per node.
pub fn log_layout_tree<A: Debug>(layout: &LayoutTree<A>) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    for line in format_layout_tree(layout).lines() {
        log::debug!("{line}");
    }
}

/// Returns a formatted string representation of the layout tree
pub fn format_layout_tree<A: Debug>(layout: &LayoutTree<A>) -> String {
    let mut output = String::new();
    writeln!(output, "=== LAYOUT TREE ===").ok();
    format_layout_box(&mut output, layout.root(), 0);
    writeln!(output, "=== END LAYOUT TREE ===").ok();
    output
}

fn format_layout_box<A: Debug>(output: &mut String, layout_box: &LayoutBox<A>, depth: usize) {
    let indent = "  ".repeat(depth);
    let rect = &layout_box.rect;
    write!(
        output,
        "{}{} pos: ({:.1}, {:.1}), size: ({:.1}x{:.1})",
        indent, layout_box.kind, rect.x, rect.y, rect.width, rect.height
    )
    .ok();
    if layout_box.alpha < 1.0 {
        write!(output, " alpha={:.2}", layout_box.alpha).ok();
    }
    if let Some(text) = &layout_box.text {
        write!(output, " \"{}\"", text.value).ok();
    }
    if let Some(click) = &layout_box.click {
        write!(output, " onClick={:?}", click.action).ok();
    }
    if let Some(tag) = &layout_box.test_tag {
        write!(output, " tag={tag}").ok();
    }
    writeln!(output).ok();

    for child in &layout_box.children {
        format_layout_box(output, child, depth + 1);
    }
}

/// Returns the description tree with each node's modifier chain.
pub fn format_node_tree<A: Debug>(node: &Node<A>) -> String {
    let mut output = String::new();
    format_node(&mut output, node, 0);
    output
}

fn format_node<A: Debug>(output: &mut String, node: &Node<A>, depth: usize) {
    let indent = "  ".repeat(depth);
    write!(output, "{}{}", indent, node.kind().name()).ok();
    if let NodeKind::Text { value, .. } = node.kind() {
        write!(output, " \"{value}\"").ok();
    }
    let elements = node.modifier().elements();
    if !elements.is_empty() {
        let chain: Vec<String> = elements.iter().map(format_element).collect();
        write!(output, " [{}]", chain.join(" -> ")).ok();
    }
    writeln!(output).ok();
    for child in node.children() {
        format_node(output, child, depth + 1);
    }
}

fn format_element<A: Debug>(element: &ModifierElement<A>) -> String {
    match element {
        ModifierElement::Size { width, height } => {
            let dim = |value: &Option<animlab_ui_graphics::Dp>| {
                value.map_or_else(|| "_".to_string(), |dp| format!("{:.1}", dp.0))
            };
            format!("size({}, {})", dim(width), dim(height))
        }
        ModifierElement::Padding(insets) => format!(
            "padding({:.1}, {:.1}, {:.1}, {:.1})",
            insets.left, insets.top, insets.right, insets.bottom
        ),
        ModifierElement::Offset { x, y } => format!("offset({:.1}, {:.1})", x.0, y.0),
        ModifierElement::Background(color) => format!("background({})", color.to_hex()),
        ModifierElement::Alpha(alpha) => format!("alpha({alpha:.2})"),
        ModifierElement::Clickable(action) => format!("clickable({action:?})"),
        ModifierElement::TestTag(tag) => format!("testTag({tag})"),
        other => other.name().to_string(),
    }
}
