//! The example screens and the catalog the launcher selects from.

mod color;
mod combined;
mod content;
mod size_position;
mod visibility;

pub use color::AnimateColorScreen;
pub use combined::{CombinedScreen, Modo};
pub use content::{AnimatedContentScreen, UiState};
pub use size_position::AnimateSizeAndPositionScreen;
pub use visibility::AnimatedVisibilityScreen;

use animlab_app::Example;
use animlab_app_shell::{Screen, Theme};
use animlab_core::RuntimeHandle;
use animlab_ui::prelude::*;
use animlab_ui::TextStyle;

/// Everything a tap can do on any of the example screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoAction {
    ToggleVisibility,
    ToggleColor,
    ToggleExpanded,
    ShowState(UiState),
    ToggleBox,
    HideButton,
    ToggleMode,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DemoExample {
    AnimatedVisibility,
    AnimateColor,
    AnimateSizeAndPosition,
    AnimatedContent,
    #[default]
    Combined,
}

impl DemoExample {
    pub const ALL: [DemoExample; 5] = [
        DemoExample::AnimatedVisibility,
        DemoExample::AnimateColor,
        DemoExample::AnimateSizeAndPosition,
        DemoExample::AnimatedContent,
        DemoExample::Combined,
    ];
}

impl Example for DemoExample {
    type Action = DemoAction;

    fn name(self) -> &'static str {
        match self {
            DemoExample::AnimatedVisibility => "AnimatedVisibility",
            DemoExample::AnimateColor => "AnimateColor",
            DemoExample::AnimateSizeAndPosition => "AnimateSizeAndPosition",
            DemoExample::AnimatedContent => "AnimatedContent",
            DemoExample::Combined => "Combined",
        }
    }

    fn build(self, runtime: &RuntimeHandle) -> Box<dyn Screen<Action = DemoAction>> {
        match self {
            DemoExample::AnimatedVisibility => Box::new(AnimatedVisibilityScreen::new(runtime)),
            DemoExample::AnimateColor => Box::new(AnimateColorScreen::new(runtime)),
            DemoExample::AnimateSizeAndPosition => {
                Box::new(AnimateSizeAndPositionScreen::new(runtime))
            }
            DemoExample::AnimatedContent => Box::new(AnimatedContentScreen::new(runtime)),
            DemoExample::Combined => Box::new(CombinedScreen::new(runtime)),
        }
    }
}

/// Full-screen column centering its children both ways.
fn centered_column(modifier: Modifier<DemoAction>, children: Vec<Node<DemoAction>>) -> Node<DemoAction> {
    Column(
        Modifier::empty().fill_max_size().then(modifier),
        ColumnSpec::new()
            .vertical_arrangement(LinearArrangement::Center)
            .horizontal_alignment(HorizontalAlignment::CenterHorizontally),
        children,
    )
}

fn labelled_button(
    modifier: Modifier<DemoAction>,
    theme: &Theme,
    label: &str,
    action: DemoAction,
) -> Node<DemoAction> {
    Button(
        modifier,
        ButtonSpec::filled(theme.primary),
        action,
        vec![Text(label, Modifier::empty(), theme.label_style())],
    )
}

fn vertical_gap(height: f32) -> Node<DemoAction> {
    Spacer(Modifier::empty().height(dp(height)))
}

fn headline(theme: &Theme) -> TextStyle {
    theme.text_style().with_font_size(sp(20.0))
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
