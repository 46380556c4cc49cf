use animlab_animation::{Animatable, AnimationSpec, SpringSpec};
use animlab_app_shell::{Screen, Theme};
use animlab_core::{MutableState, RuntimeHandle};
use animlab_ui::prelude::*;

use super::{centered_column, labelled_button, vertical_gap, DemoAction};

const COLOR_SPRING: SpringSpec = SpringSpec::bouncy_soft();

/// A square springing between red and green.
pub struct AnimateColorScreen {
    is_blue: MutableState<bool>,
    color: Animatable<Color>,
}

impl AnimateColorScreen {
    pub fn new(runtime: &RuntimeHandle) -> Self {
        Self {
            is_blue: runtime.mutable_state(true),
            color: Animatable::with_label(Color::RED, runtime.clone(), "colorAnimation"),
        }
    }

    fn target_color(&self) -> Color {
        if self.is_blue.get() {
            Color::RED
        } else {
            Color::GREEN
        }
    }

    pub fn color(&self) -> &Animatable<Color> {
        &self.color
    }
}

impl Screen for AnimateColorScreen {
    type Action = DemoAction;

    fn title(&self) -> &str {
        "AnimateColor"
    }

    fn sync(&mut self) {
        self.color
            .animate_to(self.target_color(), AnimationSpec::spring(COLOR_SPRING));
    }

    fn render(&self, theme: &Theme) -> Node<DemoAction> {
        centered_column(
            Modifier::empty().background(Color::LIGHT_GRAY),
            vec![
                Box(
                    Modifier::empty()
                        .size(dp(150.0))
                        .background(self.color.value())
                        .test_tag("color-box"),
                    BoxSpec::default(),
                    vec![],
                ),
                vertical_gap(16.0),
                labelled_button(Modifier::empty(), theme, "Cambiar color", DemoAction::ToggleColor),
            ],
        )
    }

    fn on_action(&mut self, action: &DemoAction) {
        if let DemoAction::ToggleColor = action {
            self.is_blue.update(|is_blue| *is_blue = !*is_blue);
        }
    }
}
