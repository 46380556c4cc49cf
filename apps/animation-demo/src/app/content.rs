use animlab_animation::{AnimationSpec, ContentTransition, EnterTransition, ExitTransition};
use animlab_app_shell::{Screen, Theme};
use animlab_core::{MutableState, RuntimeHandle};
use animlab_ui::prelude::*;

use super::{centered_column, headline, labelled_button, vertical_gap, DemoAction};

/// Which content variant the screen shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Loading,
    Content,
    Error,
}

impl UiState {
    pub fn message(self) -> &'static str {
        match self {
            UiState::Loading => "Cargando...",
            UiState::Content => "¡Contenido cargado!",
            UiState::Error => "Ocurrió un error.",
        }
    }

    fn button_label(self) -> &'static str {
        match self {
            UiState::Loading => "Cargando",
            UiState::Content => "Contenido",
            UiState::Error => "Error",
        }
    }
}

/// Crossfades between the loading, content and error messages.
pub struct AnimatedContentScreen {
    state: MutableState<UiState>,
    content: ContentTransition<UiState>,
}

impl AnimatedContentScreen {
    pub fn new(runtime: &RuntimeHandle) -> Self {
        let fade = AnimationSpec::tween(600);
        Self {
            state: runtime.mutable_state(UiState::Loading),
            content: ContentTransition::new(
                runtime.clone(),
                UiState::Loading,
                EnterTransition::fade_in(fade).together_with(ExitTransition::fade_out(fade)),
                "stateTransition",
            ),
        }
    }

    pub fn state(&self) -> UiState {
        self.state.get()
    }

    pub fn content(&self) -> &ContentTransition<UiState> {
        &self.content
    }
}

impl Screen for AnimatedContentScreen {
    type Action = DemoAction;

    fn title(&self) -> &str {
        "AnimatedContent"
    }

    fn sync(&mut self) {
        self.content.set_target(self.state.get());
    }

    fn render(&self, theme: &Theme) -> Node<DemoAction> {
        let messages = self
            .content
            .frames()
            .into_iter()
            .map(|frame| {
                let mut style = headline(theme);
                if frame.state == UiState::Error {
                    style = style.with_color(Color::RED);
                }
                Text(
                    frame.state.message(),
                    Modifier::empty().alpha(frame.alpha),
                    style,
                )
            })
            .collect();

        let buttons = [UiState::Loading, UiState::Content, UiState::Error]
            .into_iter()
            .map(|state| {
                labelled_button(
                    Modifier::empty(),
                    theme,
                    state.button_label(),
                    DemoAction::ShowState(state),
                )
            })
            .collect();

        centered_column(
            Modifier::empty().background(theme.background),
            vec![
                Box(Modifier::empty(), BoxSpec::default(), messages),
                vertical_gap(24.0),
                Row(
                    Modifier::empty(),
                    RowSpec::new().horizontal_arrangement(LinearArrangement::spaced_by(8.0)),
                    buttons,
                ),
            ],
        )
    }

    fn on_action(&mut self, action: &DemoAction) {
        if let DemoAction::ShowState(state) = action {
            log::debug!("content: showing {state:?}");
            self.state.set(*state);
        }
    }
}
