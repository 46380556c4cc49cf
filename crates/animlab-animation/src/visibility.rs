//! Fade-in / fade-out visibility transitions.
//!
//! A [`VisibilityTransition`] keeps an element on screen while its alpha
//! animates out, and reports a [`VisibilityPhase`] derived from the target
//! visibility and whether the alpha binding is still moving.

use animlab_core::{MutableState, RuntimeHandle};

use crate::{Animatable, AnimationSpec, SpringSpec};

/// Stiffness of the spring used by [`EnterTransition::fade_in_default`] and
/// [`ExitTransition::fade_out_default`].
const DEFAULT_FADE_STIFFNESS: f32 = SpringSpec::STIFFNESS_MEDIUM_LOW;

fn default_fade_spec() -> AnimationSpec {
    AnimationSpec::Spring(SpringSpec::preset(
        SpringSpec::DAMPING_RATIO_NO_BOUNCY,
        DEFAULT_FADE_STIFFNESS,
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityPhase {
    Hidden,
    Appearing,
    Visible,
    Disappearing,
}

impl VisibilityPhase {
    /// Whether an element in this phase still occupies the screen.
    pub fn is_on_screen(self) -> bool {
        !matches!(self, VisibilityPhase::Hidden)
    }

    pub fn is_animating(self) -> bool {
        matches!(
            self,
            VisibilityPhase::Appearing | VisibilityPhase::Disappearing
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnterTransition {
    None,
    FadeIn {
        spec: AnimationSpec,
        initial_alpha: f32,
    },
}

impl EnterTransition {
    pub fn fade_in(spec: impl Into<AnimationSpec>) -> Self {
        EnterTransition::FadeIn {
            spec: spec.into(),
            initial_alpha: 0.0,
        }
    }

    pub fn fade_in_default() -> Self {
        EnterTransition::FadeIn {
            spec: default_fade_spec(),
            initial_alpha: 0.0,
        }
    }

    /// Pairs this enter with an exit for content swaps.
    pub fn together_with(self, exit: ExitTransition) -> ContentTransform {
        ContentTransform { enter: self, exit }
    }
}

impl Default for EnterTransition {
    fn default() -> Self {
        Self::fade_in_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExitTransition {
    None,
    FadeOut {
        spec: AnimationSpec,
        target_alpha: f32,
    },
}

impl ExitTransition {
    pub fn fade_out(spec: impl Into<AnimationSpec>) -> Self {
        ExitTransition::FadeOut {
            spec: spec.into(),
            target_alpha: 0.0,
        }
    }

    pub fn fade_out_default() -> Self {
        ExitTransition::FadeOut {
            spec: default_fade_spec(),
            target_alpha: 0.0,
        }
    }

    fn target_alpha(&self) -> f32 {
        match self {
            ExitTransition::None => 0.0,
            ExitTransition::FadeOut { target_alpha, .. } => *target_alpha,
        }
    }
}

impl Default for ExitTransition {
    fn default() -> Self {
        Self::fade_out_default()
    }
}

/// Enter and exit used when one piece of content replaces another.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentTransform {
    pub enter: EnterTransition,
    pub exit: ExitTransition,
}

/// Visibility of one element, animated through its alpha.
#[derive(Debug, Clone)]
pub struct VisibilityTransition {
    visible: MutableState<bool>,
    alpha: Animatable<f32>,
    enter: EnterTransition,
    exit: ExitTransition,
}

impl VisibilityTransition {
    pub fn new(
        runtime: RuntimeHandle,
        initially_visible: bool,
        enter: EnterTransition,
        exit: ExitTransition,
        label: &'static str,
    ) -> Self {
        let initial_alpha = if initially_visible {
            1.0
        } else {
            exit.target_alpha()
        };
        Self {
            visible: MutableState::with_runtime(initially_visible, runtime.clone()),
            alpha: Animatable::with_label(initial_alpha, runtime, label),
            enter,
            exit,
        }
    }

    /// Changes the target visibility. An in-flight fade reverses from its
    /// current alpha.
    pub fn set_visible(&self, visible: bool) {
        if self.visible.get() == visible {
            return;
        }
        let entering_from_hidden = visible && self.phase() == VisibilityPhase::Hidden;
        self.visible.set(visible);
        if visible {
            match self.enter {
                EnterTransition::None => self.alpha.snap_to(1.0),
                EnterTransition::FadeIn {
                    spec,
                    initial_alpha,
                } => {
                    if entering_from_hidden {
                        self.alpha.snap_to(initial_alpha);
                    }
                    self.alpha.animate_to(1.0, spec);
                }
            }
        } else {
            match self.exit {
                ExitTransition::None => self.alpha.snap_to(0.0),
                ExitTransition::FadeOut { spec, target_alpha } => {
                    self.alpha.animate_to(target_alpha, spec)
                }
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn phase(&self) -> VisibilityPhase {
        match (self.visible.get(), self.alpha.is_running()) {
            (true, true) => VisibilityPhase::Appearing,
            (true, false) => VisibilityPhase::Visible,
            (false, true) => VisibilityPhase::Disappearing,
            (false, false) => VisibilityPhase::Hidden,
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha.value()
    }

    pub fn is_on_screen(&self) -> bool {
        self.phase().is_on_screen()
    }

    pub fn enter(&self) -> EnterTransition {
        self.enter
    }

    pub fn exit(&self) -> ExitTransition {
        self.exit
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
