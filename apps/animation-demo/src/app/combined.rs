use animlab_animation::{
    Animatable, AnimationSpec, ContentTransition, EnterTransition, ExitTransition, SpringSpec,
    VisibilityTransition,
};
use animlab_app_shell::{Screen, Theme};
use animlab_core::{MutableState, RuntimeHandle};
use animlab_ui::prelude::*;
use animlab_ui::{Dp, SurfaceSpec};

use super::{centered_column, headline, labelled_button, vertical_gap, DemoAction};

/// Display mode of the combined example.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modo {
    #[default]
    Light,
    Dark,
}

impl Modo {
    pub fn toggled(self) -> Self {
        match self {
            Modo::Light => Modo::Dark,
            Modo::Dark => Modo::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Modo::Light => "Modo Claro",
            Modo::Dark => "Modo Oscuro",
        }
    }

    pub fn background(self) -> Color {
        match self {
            Modo::Light => Color::WHITE,
            Modo::Dark => Color::BLACK,
        }
    }

    pub fn text_color(self) -> Color {
        match self {
            Modo::Light => Color::BLACK,
            Modo::Dark => Color::WHITE,
        }
    }
}

const SIZE_MILLIS: u64 = 500;
const OFFSET_MILLIS: u64 = 500;
const BUTTON_FADE_MILLIS: u64 = 400;
const MODE_FADE_MILLIS: u64 = 600;

/// Size, color, visibility, offset and content animations on one screen.
///
/// The square's size (tween) and color (spring) are separate bindings and
/// settle on their own schedules.
pub struct CombinedScreen {
    expanded: MutableState<bool>,
    visible: MutableState<bool>,
    mode: MutableState<Modo>,
    size: Animatable<Dp>,
    color: Animatable<Color>,
    offset_x: Animatable<Dp>,
    button: VisibilityTransition,
    mode_content: ContentTransition<Modo>,
}

impl CombinedScreen {
    pub fn new(runtime: &RuntimeHandle) -> Self {
        let button_fade = AnimationSpec::tween(BUTTON_FADE_MILLIS);
        let mode_fade = AnimationSpec::tween(MODE_FADE_MILLIS);
        Self {
            expanded: runtime.mutable_state(false),
            visible: runtime.mutable_state(true),
            mode: runtime.mutable_state(Modo::Light),
            size: Animatable::with_label(dp(100.0), runtime.clone(), "sizeAnimation"),
            color: Animatable::with_label(Color::CYAN, runtime.clone(), "colorAnimation"),
            offset_x: Animatable::with_label(dp(0.0), runtime.clone(), "offsetButton"),
            button: VisibilityTransition::new(
                runtime.clone(),
                true,
                EnterTransition::fade_in(button_fade),
                ExitTransition::fade_out(button_fade),
                "buttonVisibility",
            ),
            mode_content: ContentTransition::new(
                runtime.clone(),
                Modo::Light,
                EnterTransition::fade_in(mode_fade).together_with(ExitTransition::fade_out(mode_fade)),
                "modoAnimation",
            ),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    pub fn is_button_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn mode(&self) -> Modo {
        self.mode.get()
    }

    pub fn size(&self) -> &Animatable<Dp> {
        &self.size
    }

    pub fn color(&self) -> &Animatable<Color> {
        &self.color
    }

    pub fn offset_x(&self) -> &Animatable<Dp> {
        &self.offset_x
    }

    pub fn button(&self) -> &VisibilityTransition {
        &self.button
    }

    pub fn mode_content(&self) -> &ContentTransition<Modo> {
        &self.mode_content
    }

    fn mode_panel(&self, theme: &Theme) -> Node<DemoAction> {
        let text_style = headline(theme).with_color(self.mode.get().text_color());
        let frames = self
            .mode_content
            .frames()
            .into_iter()
            .map(|frame| {
                Column(
                    Modifier::empty().alpha(frame.alpha),
                    ColumnSpec::new().horizontal_alignment(HorizontalAlignment::CenterHorizontally),
                    vec![
                        Text(frame.state.label(), Modifier::empty(), text_style),
                        labelled_button(
                            Modifier::empty(),
                            theme,
                            "Cambiar modo",
                            DemoAction::ToggleMode,
                        ),
                    ],
                )
            })
            .collect();
        Box(Modifier::empty(), BoxSpec::default(), frames)
    }
}

impl Screen for CombinedScreen {
    type Action = DemoAction;

    fn title(&self) -> &str {
        "Combined"
    }

    fn sync(&mut self) {
        let expanded = self.expanded.get();
        let visible = self.visible.get();
        let size_spec = AnimationSpec::tween(SIZE_MILLIS);
        self.size
            .animate_to(if expanded { dp(200.0) } else { dp(100.0) }, size_spec);
        self.color.animate_to(
            if expanded { Color::MAGENTA } else { Color::CYAN },
            AnimationSpec::spring(SpringSpec::bouncy()),
        );
        self.offset_x.animate_to(
            if visible { dp(0.0) } else { dp(200.0) },
            AnimationSpec::tween(OFFSET_MILLIS),
        );
        self.button.set_visible(visible);
        self.mode_content.set_target(self.mode.get());
    }

    fn render(&self, theme: &Theme) -> Node<DemoAction> {
        let mut children = vec![
            Box(
                Modifier::empty()
                    .size(self.size.value())
                    .background(self.color.value())
                    .clickable(DemoAction::ToggleBox)
                    .test_tag("combined-box"),
                BoxSpec::default(),
                vec![],
            ),
            vertical_gap(24.0),
        ];
        if self.button.is_on_screen() {
            children.push(labelled_button(
                Modifier::empty()
                    .alpha(self.button.alpha())
                    .offset(self.offset_x.value(), dp(0.0)),
                theme,
                "Desaparecer",
                DemoAction::HideButton,
            ));
        }
        children.push(vertical_gap(24.0));
        children.push(self.mode_panel(theme));

        Surface(
            Modifier::empty()
                .fill_max_size()
                .background(self.mode.get().background()),
            SurfaceSpec::new(Color::TRANSPARENT),
            vec![centered_column(Modifier::empty().padding(dp(16.0)), children)],
        )
    }

    fn on_action(&mut self, action: &DemoAction) {
        match action {
            DemoAction::ToggleBox => self.expanded.update(|expanded| *expanded = !*expanded),
            DemoAction::HideButton => self.visible.set(false),
            DemoAction::ToggleMode => {
                let mode = self.mode.update(|mode| {
                    *mode = mode.toggled();
                    *mode
                });
                log::debug!("combined: mode now {mode:?}");
            }
            _ => {}
        }
    }
}
