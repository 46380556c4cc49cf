use std::fmt::Write;

use animlab_ui_graphics::{Color, Rect};

use crate::{HitTestTarget, RenderScene};

#[derive(Clone, Debug, PartialEq)]
pub struct DrawShape {
    pub rect: Rect,
    /// Color with every ancestor opacity folded into alpha.
    pub color: Color,
    pub z_index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextDraw {
    pub rect: Rect,
    pub text: String,
    pub color: Color,
    pub font_size_px: f32,
    pub z_index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HitRegion<A> {
    pub rect: Rect,
    pub action: A,
    pub z_index: usize,
}

impl<A> HitRegion<A> {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }
}

impl<A> HitTestTarget for HitRegion<A> {
    type Action = A;

    fn action(&self) -> &A {
        &self.action
    }
}

/// Draw list of the current frame. Fully transparent draws are dropped.
#[derive(Clone, Debug)]
pub struct Scene<A> {
    pub shapes: Vec<DrawShape>,
    pub texts: Vec<TextDraw>,
    pub hits: Vec<HitRegion<A>>,
    next_z: usize,
}

impl<A> Scene<A> {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            texts: Vec::new(),
            hits: Vec::new(),
            next_z: 0,
        }
    }

    fn next_z(&mut self) -> usize {
        let z_index = self.next_z;
        self.next_z += 1;
        z_index
    }

    pub fn push_shape(&mut self, rect: Rect, color: Color) {
        if color.a() <= 0.0 {
            return;
        }
        let z_index = self.next_z();
        self.shapes.push(DrawShape {
            rect,
            color,
            z_index,
        });
    }

    pub fn push_text(&mut self, rect: Rect, text: String, color: Color, font_size_px: f32) {
        if color.a() <= 0.0 {
            return;
        }
        let z_index = self.next_z();
        self.texts.push(TextDraw {
            rect,
            text,
            color,
            font_size_px,
            z_index,
        });
    }

    pub fn push_hit(&mut self, rect: Rect, action: A) {
        let z_index = self.next_z();
        self.hits.push(HitRegion {
            rect,
            action,
            z_index,
        });
    }

    pub fn find_text(&self, text: &str) -> Option<&TextDraw> {
        self.texts.iter().find(|draw| draw.text == text)
    }

    /// Topmost shape covering the point.
    pub fn shape_under(&self, x: f32, y: f32) -> Option<&DrawShape> {
        self.shapes
            .iter()
            .filter(|shape| shape.rect.contains(x, y))
            .max_by_key(|shape| shape.z_index)
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.texts.is_empty()
    }

    /// One line per draw in paint order.
    pub fn describe(&self) -> String {
        enum Draw<'a> {
            Shape(&'a DrawShape),
            Text(&'a TextDraw),
        }
        let mut draws: Vec<(usize, Draw<'_>)> = self
            .shapes
            .iter()
            .map(|shape| (shape.z_index, Draw::Shape(shape)))
            .chain(self.texts.iter().map(|text| (text.z_index, Draw::Text(text))))
            .collect();
        draws.sort_by_key(|(z_index, _)| *z_index);

        let mut output = String::new();
        for (_, draw) in draws {
            match draw {
                Draw::Shape(shape) => writeln!(
                    output,
                    "rect ({:.1}, {:.1}) {:.1}x{:.1} {}",
                    shape.rect.x,
                    shape.rect.y,
                    shape.rect.width,
                    shape.rect.height,
                    shape.color.to_hex()
                ),
                Draw::Text(text) => writeln!(
                    output,
                    "text \"{}\" ({:.1}, {:.1}) {}",
                    text.text,
                    text.rect.x,
                    text.rect.y,
                    text.color.to_hex()
                ),
            }
            .ok();
        }
        output
    }
}

impl<A> Default for Scene<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> RenderScene for Scene<A> {
    type Action = A;
    type HitTarget = HitRegion<A>;

    fn clear(&mut self) {
        self.shapes.clear();
        self.texts.clear();
        self.hits.clear();
        self.next_z = 0;
    }

    fn hit_test(&self, x: f32, y: f32) -> Vec<Self::HitTarget> {
        let mut hits: Vec<_> = self
            .hits
            .iter()
            .filter(|hit| hit.contains(x, y))
            .cloned()
            .collect();
        hits.sort_by(|a, b| b.z_index.cmp(&a.z_index));
        hits
    }
}
