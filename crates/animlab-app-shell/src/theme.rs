use animlab_ui::TextStyle;
use animlab_ui_graphics::{sp, Color, Sp};

/// Colors and type scale shared by every screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub on_background: Color,
    pub text_size: Sp,
}

impl Theme {
    pub const fn light() -> Self {
        Self {
            background: Color::WHITE,
            surface: Color::from_argb(0xFFFE_F7FF),
            primary: Color::from_argb(0xFF67_50A4),
            on_primary: Color::WHITE,
            on_background: Color::from_argb(0xFF1D_1B20),
            text_size: sp(16.0),
        }
    }

    pub const fn dark() -> Self {
        Self {
            background: Color::from_argb(0xFF14_1218),
            surface: Color::from_argb(0xFF1D_1B20),
            primary: Color::from_argb(0xFFD0_BCFF),
            on_primary: Color::from_argb(0xFF38_1E72),
            on_background: Color::from_argb(0xFFE6_E0E9),
            text_size: sp(16.0),
        }
    }

    /// Body text on the background.
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.on_background, self.text_size)
    }

    /// Label text on a primary-colored container.
    pub fn label_style(&self) -> TextStyle {
        TextStyle::new(self.on_primary, self.text_size)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
