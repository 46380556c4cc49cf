use animlab_ui::LayoutBox;
use animlab_ui_graphics::Rect;

use crate::scene::Scene;
use crate::RenderError;

fn is_finite(rect: &Rect) -> bool {
    rect.x.is_finite() && rect.y.is_finite() && rect.width.is_finite() && rect.height.is_finite()
}

/// Paints a layout subtree back to front: a node's backgrounds, then its
/// text, then its children.
pub(crate) fn render_layout_tree<A: Clone>(
    layout: &LayoutBox<A>,
    scene: &mut Scene<A>,
) -> Result<(), RenderError> {
    if !is_finite(&layout.rect) || !is_finite(&layout.content_rect) {
        return Err(RenderError::NonFiniteGeometry { kind: layout.kind });
    }

    for background in &layout.backgrounds {
        scene.push_shape(
            background.rect,
            background.color.with_alpha(background.color.a() * background.alpha),
        );
    }

    if let Some(text) = &layout.text {
        scene.push_text(
            text.rect,
            text.value.clone(),
            text.color.with_alpha(text.color.a() * layout.alpha),
            text.font_size_px,
        );
    }

    if let Some(click) = &layout.click {
        scene.push_hit(click.rect, click.action.clone());
    }

    for child in &layout.children {
        render_layout_tree(child, scene)?;
    }
    Ok(())
}
