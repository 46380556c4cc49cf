use std::fmt::Debug;

use animlab_core::RuntimeHandle;

use crate::{ContentTransform, VisibilityPhase, VisibilityTransition};

/// One piece of content currently on screen and how opaque it is.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentFrame<S> {
    pub state: S,
    pub alpha: f32,
    pub phase: VisibilityPhase,
}

/// Crossfade between discrete content states.
///
/// Each state on screen owns a [`VisibilityTransition`]. Switching the target
/// starts the outgoing entry's exit and the incoming entry's enter in the same
/// frame; entries are dropped once their exit completes. Entries are kept in
/// paint order, the current target last.
pub struct ContentTransition<S: Clone + PartialEq + Debug + 'static> {
    runtime: RuntimeHandle,
    transform: ContentTransform,
    target: S,
    entries: Vec<(S, VisibilityTransition)>,
    label: &'static str,
}

impl<S: Clone + PartialEq + Debug + 'static> ContentTransition<S> {
    pub fn new(
        runtime: RuntimeHandle,
        initial: S,
        transform: ContentTransform,
        label: &'static str,
    ) -> Self {
        let entry = VisibilityTransition::new(
            runtime.clone(),
            true,
            transform.enter,
            transform.exit,
            label,
        );
        Self {
            runtime,
            transform,
            target: initial.clone(),
            entries: vec![(initial, entry)],
            label,
        }
    }

    pub fn set_target(&mut self, target: S) {
        if self.target == target {
            return;
        }
        log::debug!("{}: content {:?} -> {:?}", self.label, self.target, target);
        self.prune();

        for (state, transition) in &self.entries {
            if *state != target {
                transition.set_visible(false);
            }
        }

        let incoming = match self.entries.iter().position(|(state, _)| *state == target) {
            Some(index) => self.entries.remove(index),
            None => {
                let transition = VisibilityTransition::new(
                    self.runtime.clone(),
                    false,
                    self.transform.enter,
                    self.transform.exit,
                    self.label,
                );
                (target.clone(), transition)
            }
        };
        incoming.1.set_visible(true);
        self.entries.push(incoming);
        self.target = target;
    }

    pub fn target(&self) -> &S {
        &self.target
    }

    pub fn transform(&self) -> ContentTransform {
        self.transform
    }

    /// Content to draw this frame, back to front.
    pub fn frames(&self) -> Vec<ContentFrame<S>> {
        self.entries
            .iter()
            .filter_map(|(state, transition)| {
                let phase = transition.phase();
                phase.is_on_screen().then(|| ContentFrame {
                    state: state.clone(),
                    alpha: transition.alpha(),
                    phase,
                })
            })
            .collect()
    }

    pub fn is_running(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, transition)| transition.phase().is_animating())
    }

    fn prune(&mut self) {
        let target = &self.target;
        self.entries.retain(|(state, transition)| {
            state == target || transition.phase() != VisibilityPhase::Hidden
        });
    }
}

impl<S: Clone + PartialEq + Debug + 'static> Debug for ContentTransition<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentTransition")
            .field("label", &self.label)
            .field("target", &self.target)
            .field("entries", &self.frames())
            .finish()
    }
}
