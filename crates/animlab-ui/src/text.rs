#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Height of a single line of text
    pub line_height: f32,
    /// Number of lines in the text
    pub line_count: usize,
}

/// Measures text for layout. Font size is in pixels.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f32) -> TextMetrics;
}

/// Every character advances by the same fraction of the font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospacedTextMeasurer {
    advance_em: f32,
    line_height_em: f32,
}

impl MonospacedTextMeasurer {
    pub const DEFAULT_ADVANCE_EM: f32 = 0.6;
    pub const DEFAULT_LINE_HEIGHT_EM: f32 = 1.2;

    pub fn new(advance_em: f32, line_height_em: f32) -> Self {
        Self {
            advance_em,
            line_height_em,
        }
    }
}

impl Default for MonospacedTextMeasurer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE_EM, Self::DEFAULT_LINE_HEIGHT_EM)
    }
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f32) -> TextMetrics {
        let advance = self.advance_em * font_size_px;
        let line_height = self.line_height_em * font_size_px;
        let mut line_count = 0;
        let mut widest = 0usize;
        for line in text.split('\n') {
            line_count += 1;
            widest = widest.max(line.chars().count());
        }
        TextMetrics {
            width: widest as f32 * advance,
            height: line_count as f32 * line_height,
            line_height,
            line_count,
        }
    }
}
