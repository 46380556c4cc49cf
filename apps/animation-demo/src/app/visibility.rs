use animlab_animation::{EnterTransition, ExitTransition, VisibilityTransition};
use animlab_app_shell::{Screen, Theme};
use animlab_core::{MutableState, RuntimeHandle};
use animlab_ui::prelude::*;

use super::{centered_column, labelled_button, vertical_gap, DemoAction};

/// A button that fades a blue square in and out.
pub struct AnimatedVisibilityScreen {
    visible: MutableState<bool>,
    square: VisibilityTransition,
}

impl AnimatedVisibilityScreen {
    pub fn new(runtime: &RuntimeHandle) -> Self {
        Self {
            visible: runtime.mutable_state(true),
            square: VisibilityTransition::new(
                runtime.clone(),
                true,
                EnterTransition::fade_in_default(),
                ExitTransition::fade_out_default(),
                "square visibility",
            ),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn square(&self) -> &VisibilityTransition {
        &self.square
    }
}

impl Screen for AnimatedVisibilityScreen {
    type Action = DemoAction;

    fn title(&self) -> &str {
        "AnimatedVisibility"
    }

    fn sync(&mut self) {
        self.square.set_visible(self.visible.get());
    }

    fn render(&self, theme: &Theme) -> Node<DemoAction> {
        let label = if self.visible.get() { "Ocultar" } else { "Mostrar" };
        let mut children = vec![
            labelled_button(Modifier::empty(), theme, label, DemoAction::ToggleVisibility),
            vertical_gap(16.0),
        ];
        if self.square.is_on_screen() {
            children.push(Box(
                Modifier::empty()
                    .alpha(self.square.alpha())
                    .size(dp(150.0))
                    .background(Color::BLUE)
                    .test_tag("visibility-box"),
                BoxSpec::default(),
                vec![],
            ));
        }
        centered_column(Modifier::empty().background(theme.background), children)
    }

    fn on_action(&mut self, action: &DemoAction) {
        if let DemoAction::ToggleVisibility = action {
            self.visible.update(|visible| *visible = !*visible);
        }
    }
}
