use super::{Dp, Modifier, ModifierElement};

impl<A> Modifier<A> {
    /// Offset the content by (x, y). The offsets can be positive or negative
    /// and do not change the size reported to the parent.
    ///
    /// Example: `Modifier::empty().offset(dp(0.0), dp(-150.0))`
    pub fn offset(self, x: Dp, y: Dp) -> Self {
        self.then(Self::with_element(ModifierElement::Offset { x, y }))
    }
}
