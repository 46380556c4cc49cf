use super::{Dp, EdgeInsets, Modifier, ModifierElement};

impl<A> Modifier<A> {
    /// Add uniform padding to all sides.
    ///
    /// Example: `Modifier::empty().padding(dp(16.0))`
    pub fn padding(self, all: Dp) -> Self {
        self.padding_insets(EdgeInsets::uniform(all.0))
    }

    /// Example: `Modifier::empty().padding_symmetric(dp(24.0), dp(8.0))`
    pub fn padding_symmetric(self, horizontal: Dp, vertical: Dp) -> Self {
        self.padding_insets(EdgeInsets::symmetric(horizontal.0, vertical.0))
    }

    pub fn padding_each(self, left: Dp, top: Dp, right: Dp, bottom: Dp) -> Self {
        self.padding_insets(EdgeInsets::from_components(
            left.0, top.0, right.0, bottom.0,
        ))
    }

    /// Padding from insets expressed in dp.
    pub fn padding_insets(self, insets: EdgeInsets) -> Self {
        self.then(Self::with_element(ModifierElement::Padding(insets)))
    }
}
