use super::{Modifier, ModifierElement};

impl<A> Modifier<A> {
    /// Make the component clickable. A tap inside its bounds reports `action`
    /// to whoever owns the tree.
    ///
    /// Example: `Modifier::empty().clickable(Action::ToggleExpanded)`
    pub fn clickable(self, action: A) -> Self {
        self.then(Self::with_element(ModifierElement::Clickable(action)))
    }

    /// Tag used to find the element from tests.
    pub fn test_tag(self, tag: impl Into<String>) -> Self {
        self.then(Self::with_element(ModifierElement::TestTag(tag.into())))
    }
}
