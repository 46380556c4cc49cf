use super::{Dp, Modifier, ModifierElement};

impl<A> Modifier<A> {
    /// Declare the preferred size of the content to be exactly `size` square.
    ///
    /// The incoming measurement constraints may override this value, forcing
    /// the content to be smaller or larger.
    ///
    /// Example: `Modifier::empty().size(dp(150.0))`
    pub fn size(self, size: Dp) -> Self {
        self.size_wh(size, size)
    }

    /// Declare the preferred width and height of the content.
    pub fn size_wh(self, width: Dp, height: Dp) -> Self {
        self.then(Self::with_element(ModifierElement::Size {
            width: Some(width),
            height: Some(height),
        }))
    }

    /// Example: `Modifier::empty().width(dp(100.0)).height(dp(200.0))`
    pub fn width(self, width: Dp) -> Self {
        self.then(Self::with_element(ModifierElement::Size {
            width: Some(width),
            height: None,
        }))
    }

    pub fn height(self, height: Dp) -> Self {
        self.then(Self::with_element(ModifierElement::Size {
            width: None,
            height: Some(height),
        }))
    }
}
