use super::{Modifier, ModifierElement};

impl<A> Modifier<A> {
    /// Have the content fill the maximum available width.
    pub fn fill_max_width(self) -> Self {
        self.then(Self::with_element(ModifierElement::Fill {
            width: true,
            height: false,
        }))
    }

    /// Have the content fill the maximum available height.
    pub fn fill_max_height(self) -> Self {
        self.then(Self::with_element(ModifierElement::Fill {
            width: false,
            height: true,
        }))
    }

    /// Have the content fill the maximum available size in both directions.
    ///
    /// Unbounded directions are left alone.
    pub fn fill_max_size(self) -> Self {
        self.then(Self::with_element(ModifierElement::Fill {
            width: true,
            height: true,
        }))
    }
}
