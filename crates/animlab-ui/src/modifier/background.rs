use super::{Color, Modifier, ModifierElement};

impl<A> Modifier<A> {
    /// Paint `color` behind everything inside this point of the chain.
    pub fn background(self, color: Color) -> Self {
        self.then(Self::with_element(ModifierElement::Background(color)))
    }

    /// Multiply the opacity of everything inside this point of the chain,
    /// children included. Values are clamped to `[0, 1]`.
    pub fn alpha(self, alpha: f32) -> Self {
        let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
        self.then(Self::with_element(ModifierElement::Alpha(alpha)))
    }
}
