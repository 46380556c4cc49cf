use animlab_animation::{Animatable, AnimationSpec};
use animlab_app_shell::{Screen, Theme};
use animlab_core::{MutableState, RuntimeHandle};
use animlab_ui::prelude::*;
use animlab_ui::Dp;

use super::{centered_column, labelled_button, vertical_gap, DemoAction};

const DURATION_MILLIS: u64 = 600;

/// A red square that grows and lifts when expanded.
pub struct AnimateSizeAndPositionScreen {
    expanded: MutableState<bool>,
    size: Animatable<Dp>,
    offset_y: Animatable<Dp>,
}

impl AnimateSizeAndPositionScreen {
    pub fn new(runtime: &RuntimeHandle) -> Self {
        Self {
            expanded: runtime.mutable_state(false),
            size: Animatable::with_label(dp(100.0), runtime.clone(), "sizeAnimation"),
            offset_y: Animatable::with_label(dp(0.0), runtime.clone(), "offsetY"),
        }
    }

    pub fn size(&self) -> &Animatable<Dp> {
        &self.size
    }

    pub fn offset_y(&self) -> &Animatable<Dp> {
        &self.offset_y
    }
}

impl Screen for AnimateSizeAndPositionScreen {
    type Action = DemoAction;

    fn title(&self) -> &str {
        "AnimateSizeAndPosition"
    }

    fn sync(&mut self) {
        let (size, offset) = if self.expanded.get() {
            (dp(200.0), dp(-150.0))
        } else {
            (dp(100.0), dp(0.0))
        };
        let spec = AnimationSpec::tween(DURATION_MILLIS);
        self.size.animate_to(size, spec);
        self.offset_y.animate_to(offset, spec);
    }

    fn render(&self, theme: &Theme) -> Node<DemoAction> {
        centered_column(
            Modifier::empty().background(theme.background),
            vec![
                Box(
                    Modifier::empty()
                        .offset(dp(0.0), self.offset_y.value())
                        .size(self.size.value())
                        .background(Color::RED)
                        .test_tag("size-box"),
                    BoxSpec::default(),
                    vec![],
                ),
                vertical_gap(16.0),
                labelled_button(Modifier::empty(), theme, "Animar cuadro", DemoAction::ToggleExpanded),
            ],
        )
    }

    fn on_action(&mut self, action: &DemoAction) {
        if let DemoAction::ToggleExpanded = action {
            self.expanded.update(|expanded| *expanded = !*expanded);
        }
    }
}
