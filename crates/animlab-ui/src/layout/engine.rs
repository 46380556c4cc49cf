use animlab_ui_graphics::{Color, Rect, Size};
use animlab_ui_layout::{Alignment, Arrangement, Axis, Constraints, LinearArrangement};
use smallvec::SmallVec;

use super::{Background, ClickTarget, LayoutBox, LayoutError, LayoutTree, TextLayout};
use crate::modifier::ModifierElement;
use crate::node::{Node, NodeKind};
use crate::text::{MonospacedTextMeasurer, TextMeasurer};

/// Content of a node measured under its innermost constraints, positioned
/// relative to the content origin.
struct ContentLayout<A> {
    size: Size,
    children: Vec<LayoutBox<A>>,
    text: Option<TextLayout>,
    fill: Option<Color>,
}

impl<A> ContentLayout<A> {
    fn leaf(size: Size) -> Self {
        Self {
            size,
            children: Vec::new(),
            text: None,
            fill: None,
        }
    }
}

/// Measures and places description trees.
pub struct LayoutEngine {
    density: f32,
    measurer: Box<dyn TextMeasurer>,
}

impl LayoutEngine {
    pub fn new(density: f32) -> Result<Self, LayoutError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(LayoutError::InvalidDensity(density));
        }
        Ok(Self {
            density,
            measurer: Box::new(MonospacedTextMeasurer::default()),
        })
    }

    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    pub fn set_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.measurer = Box::new(measurer);
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    /// Lays `root` out inside `viewport` (pixels). The root may be any size
    /// up to the viewport and sits at its top-left corner.
    pub fn compute_layout<A: Clone>(
        &self,
        root: &Node<A>,
        viewport: Size,
    ) -> Result<LayoutTree<A>, LayoutError> {
        let valid = |extent: f32| extent.is_finite() && extent >= 0.0;
        if !valid(viewport.width) || !valid(viewport.height) {
            return Err(LayoutError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let layout = self.layout_node(root, Constraints::loose(viewport), 1.0)?;
        log::trace!(
            "laid out {} nodes in {}x{}",
            layout.node_count(),
            viewport.width,
            viewport.height
        );
        Ok(LayoutTree::new(layout, viewport))
    }

    /// Rejects lengths that would poison constraint arithmetic.
    fn check_lengths<A>(&self, element: &ModifierElement<A>) -> Result<(), LayoutError> {
        let lengths: SmallVec<[f32; 4]> = match element {
            ModifierElement::Size { width, height } => width
                .iter()
                .chain(height.iter())
                .map(|length| length.to_px(self.density))
                .collect(),
            ModifierElement::Offset { x, y } => {
                SmallVec::from_slice(&[x.to_px(self.density), y.to_px(self.density)])
            }
            ModifierElement::Padding(insets) => {
                let insets = insets.scaled(self.density);
                SmallVec::from_slice(&[insets.left, insets.top, insets.right, insets.bottom])
            }
            _ => SmallVec::new(),
        };
        match lengths.into_iter().find(|length| !length.is_finite()) {
            Some(value) => Err(LayoutError::NonFiniteLength {
                kind: element.name(),
                value,
            }),
            None => Ok(()),
        }
    }

    fn apply_constraints<A>(&self, element: &ModifierElement<A>, incoming: Constraints) -> Constraints {
        match element {
            ModifierElement::Size { width, height } => {
                let mut constraints = incoming;
                if let Some(width) = width {
                    constraints = constraints.with_exact_width(width.to_px(self.density));
                }
                if let Some(height) = height {
                    constraints = constraints.with_exact_height(height.to_px(self.density));
                }
                constraints
            }
            ModifierElement::Fill { width, height } => {
                let mut constraints = incoming;
                if *width {
                    constraints = constraints.fill_width();
                }
                if *height {
                    constraints = constraints.fill_height();
                }
                constraints
            }
            ModifierElement::Padding(insets) => incoming.deflate(insets.scaled(self.density)),
            _ => incoming,
        }
    }

    /// Lays out one node with its top-left corner at the origin.
    fn layout_node<A: Clone>(
        &self,
        node: &Node<A>,
        incoming: Constraints,
        inherited_alpha: f32,
    ) -> Result<LayoutBox<A>, LayoutError> {
        let elements = node.modifier().elements();

        // Constraints in effect outside each element; the last entry is what
        // the content itself sees.
        let mut layer_constraints: SmallVec<[Constraints; 8]> = SmallVec::new();
        let mut current = incoming;
        let mut content_alpha = inherited_alpha;
        layer_constraints.push(current);
        for element in elements {
            self.check_lengths(element)?;
            current = self.apply_constraints(element, current);
            layer_constraints.push(current);
            if let ModifierElement::Alpha(alpha) = element {
                content_alpha *= alpha;
            }
        }

        let content = self.layout_content(node, current, content_alpha)?;

        let mut sizes: SmallVec<[Size; 8]> = SmallVec::from_elem(Size::ZERO, elements.len() + 1);
        sizes[elements.len()] = current.constrain(content.size);
        for (index, element) in elements.iter().enumerate().rev() {
            let inner = sizes[index + 1];
            let grown = match element {
                ModifierElement::Padding(insets) => {
                    let insets = insets.scaled(self.density);
                    Size::new(
                        inner.width + insets.horizontal_sum(),
                        inner.height + insets.vertical_sum(),
                    )
                }
                _ => inner,
            };
            sizes[index] = layer_constraints[index].constrain(grown);
        }

        let outer = Rect::from_size(sizes[0]);
        let mut rect = outer;
        let mut alpha = inherited_alpha;
        let mut backgrounds = Vec::new();
        let mut click = None;
        let mut test_tag = None;
        for (index, element) in elements.iter().enumerate() {
            let inner = sizes[index + 1];
            let (mut x, mut y) = (rect.x, rect.y);
            match element {
                ModifierElement::Padding(insets) => {
                    let insets = insets.scaled(self.density);
                    x += insets.left;
                    y += insets.top;
                }
                ModifierElement::Offset { x: dx, y: dy } => {
                    x += dx.to_px(self.density);
                    y += dy.to_px(self.density);
                }
                ModifierElement::Background(color) => backgrounds.push(Background {
                    rect,
                    color: *color,
                    alpha,
                }),
                ModifierElement::Alpha(value) => alpha *= value,
                ModifierElement::Clickable(action) => {
                    click = Some(ClickTarget {
                        rect,
                        action: action.clone(),
                    })
                }
                ModifierElement::TestTag(tag) => test_tag = Some(tag.clone()),
                ModifierElement::Size { .. } | ModifierElement::Fill { .. } => {}
            }
            rect = Rect::new(x, y, inner.width, inner.height);
        }

        if let Some(fill) = content.fill {
            backgrounds.push(Background {
                rect,
                color: fill,
                alpha: content_alpha,
            });
        }
        let text = content.text.map(|mut text| {
            text.rect = text.rect.translate(rect.x, rect.y);
            text
        });
        let mut children = content.children;
        for child in &mut children {
            child.translate(rect.x, rect.y);
        }

        Ok(LayoutBox {
            kind: node.kind().name(),
            rect: outer,
            content_rect: rect,
            alpha: content_alpha,
            backgrounds,
            text,
            click,
            test_tag,
            children,
        })
    }

    fn layout_content<A: Clone>(
        &self,
        node: &Node<A>,
        constraints: Constraints,
        alpha: f32,
    ) -> Result<ContentLayout<A>, LayoutError> {
        let children = node.children();
        let content = match node.kind() {
            NodeKind::Column(spec) => self.layout_linear(
                children,
                constraints,
                Axis::Vertical,
                &spec.vertical_arrangement.scaled(self.density),
                &|available: f32, child: f32| spec.horizontal_alignment.align(available, child),
                alpha,
            )?,
            NodeKind::Row(spec) => self.layout_linear(
                children,
                constraints,
                Axis::Horizontal,
                &spec.horizontal_arrangement.scaled(self.density),
                &|available: f32, child: f32| spec.vertical_alignment.align(available, child),
                alpha,
            )?,
            NodeKind::Box(spec) => self.layout_stack(
                children,
                constraints,
                spec.content_alignment,
                spec.propagate_min_constraints,
                alpha,
            )?,
            NodeKind::Surface(spec) => {
                let mut content =
                    self.layout_stack(children, constraints, spec.content_alignment, true, alpha)?;
                content.fill = Some(spec.color);
                content
            }
            NodeKind::Button(spec) => {
                let padding = spec.content_padding.scaled(self.density);
                let minimum = Size::new(
                    spec.min_width.to_px(self.density),
                    spec.min_height.to_px(self.density),
                );
                let outer = constraints.at_least(minimum);
                let mut row = self.layout_linear(
                    children,
                    outer.deflate(padding),
                    Axis::Horizontal,
                    &LinearArrangement::Center,
                    &|available: f32, child: f32| {
                        animlab_ui_layout::VerticalAlignment::CenterVertically.align(available, child)
                    },
                    alpha,
                )?;
                for child in &mut row.children {
                    child.translate(padding.left, padding.top);
                }
                ContentLayout {
                    size: outer.constrain(Size::new(
                        row.size.width + padding.horizontal_sum(),
                        row.size.height + padding.vertical_sum(),
                    )),
                    children: row.children,
                    text: None,
                    fill: Some(spec.container_color),
                }
            }
            NodeKind::Text { value, style } => {
                let font_size_px = style.font_size.to_px(self.density, 1.0);
                let metrics = self.measurer.measure(value, font_size_px);
                let size = constraints.constrain(Size::new(metrics.width, metrics.height));
                let mut content = ContentLayout::leaf(size);
                content.text = Some(TextLayout {
                    value: value.clone(),
                    color: style.color,
                    font_size_px,
                    rect: Rect::from_size(size),
                });
                content
            }
            NodeKind::Spacer => ContentLayout::leaf(constraints.min_size()),
        };
        Ok(content)
    }

    fn layout_linear<A: Clone>(
        &self,
        children: &[Node<A>],
        constraints: Constraints,
        axis: Axis,
        arrangement: &dyn Arrangement,
        cross_align: &dyn Fn(f32, f32) -> f32,
        alpha: f32,
    ) -> Result<ContentLayout<A>, LayoutError> {
        let child_constraints = constraints.loosen();
        let mut boxes = children
            .iter()
            .map(|child| self.layout_node(child, child_constraints, alpha))
            .collect::<Result<Vec<_>, _>>()?;

        let main_sizes: Vec<f32> = boxes.iter().map(|b| axis.main(b.rect.size())).collect();
        let widest_cross = boxes
            .iter()
            .map(|b| axis.cross(b.rect.size()))
            .fold(0.0f32, f32::max);

        let (min_main, max_main) = axis.main_bounds(&constraints);
        let (min_cross, max_cross) = axis.cross_bounds(&constraints);
        let main = arrangement.content_size(&main_sizes).clamp(min_main, max_main);
        let cross = widest_cross.clamp(min_cross, max_cross);

        let mut positions = vec![0.0; boxes.len()];
        arrangement.arrange(main, &main_sizes, &mut positions);
        for (child, position) in boxes.iter_mut().zip(positions) {
            let cross_offset = cross_align(cross, axis.cross(child.rect.size()));
            let offset = axis.point(position, cross_offset);
            child.translate(offset.x, offset.y);
        }

        Ok(ContentLayout {
            size: axis.size(main, cross),
            children: boxes,
            text: None,
            fill: None,
        })
    }

    fn layout_stack<A: Clone>(
        &self,
        children: &[Node<A>],
        constraints: Constraints,
        alignment: Alignment,
        propagate_min_constraints: bool,
        alpha: f32,
    ) -> Result<ContentLayout<A>, LayoutError> {
        let child_constraints = if propagate_min_constraints {
            constraints
        } else {
            constraints.loosen()
        };
        let mut boxes = children
            .iter()
            .map(|child| self.layout_node(child, child_constraints, alpha))
            .collect::<Result<Vec<_>, _>>()?;

        let content = boxes.iter().fold(Size::ZERO, |acc, b| {
            Size::new(acc.width.max(b.rect.width), acc.height.max(b.rect.height))
        });
        let size = constraints.constrain(content);
        for child in &mut boxes {
            let origin = alignment.align(size, child.rect.size());
            child.translate(origin.x, origin.y);
        }

        Ok(ContentLayout {
            size,
            children: boxes,
            text: None,
            fill: None,
        })
    }
}
