use std::fmt::Debug;

use animlab_ui::Node;

use crate::Theme;

/// A screen owns its discrete state and animation bindings and describes
/// its UI as a pure function of them.
pub trait Screen {
    type Action: Clone + PartialEq + Debug + 'static;

    fn title(&self) -> &str;

    /// Re-derives animation targets from the discrete state. Runs before
    /// every render; bindings ignore targets they already have.
    fn sync(&mut self) {}

    fn render(&self, theme: &Theme) -> Node<Self::Action>;

    fn on_action(&mut self, action: &Self::Action);
}

impl<S: Screen + ?Sized> Screen for Box<S> {
    type Action = S::Action;

    fn title(&self) -> &str {
        (**self).title()
    }

    fn sync(&mut self) {
        (**self).sync()
    }

    fn render(&self, theme: &Theme) -> Node<Self::Action> {
        (**self).render(theme)
    }

    fn on_action(&mut self, action: &Self::Action) {
        (**self).on_action(action)
    }
}
