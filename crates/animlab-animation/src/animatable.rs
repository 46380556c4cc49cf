use std::cell::RefCell;
use std::rc::Rc;

use animlab_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};
use smallvec::smallvec;

use crate::{AnimationSpec, AnimationVector, Trajectory, VectorConvertible};

/// A value bound to a target that animates toward it on the frame clock.
///
/// `animate_to` only records the new target; the trajectory starts on the
/// next frame from whatever value and velocity the binding had at the last
/// frame, so a retarget never jumps. Every frame samples the trajectory at
/// the frame time and writes the result into the backing [`MutableState`],
/// which invalidates the runtime.
pub struct Animatable<T: VectorConvertible> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: VectorConvertible> {
    label: &'static str,
    state: MutableState<T>,
    runtime: RuntimeHandle,
    current: T,
    velocity: AnimationVector,
    target: T,
    spec: AnimationSpec,
    trajectory: Option<Trajectory<T>>,
    pending_start: bool,
    registration: Option<FrameCallbackRegistration>,
}

impl<T: VectorConvertible> Animatable<T> {
    /// Create a new animatable resting at `initial`.
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        Self::with_label(initial, runtime, "animatable")
    }

    pub fn with_label(initial: T, runtime: RuntimeHandle, label: &'static str) -> Self {
        let components = initial.to_vector().len();
        let inner = AnimatableInner {
            label,
            state: MutableState::with_runtime(initial.clone(), runtime.clone()),
            runtime,
            current: initial.clone(),
            velocity: smallvec![0.0; components],
            target: initial,
            spec: AnimationSpec::default(),
            trajectory: None,
            pending_start: false,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate to `target` using `spec`.
    ///
    /// Asking for the target and spec already in effect is a no-op, so the
    /// caller may re-derive targets on every render. A binding resting at
    /// `target` only adopts the new spec.
    pub fn animate_to(&self, target: T, spec: AnimationSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            let at_rest = !inner.pending_start && inner.trajectory.is_none();
            if inner.target == target && (inner.spec == spec || at_rest) {
                inner.spec = spec;
                return;
            }
            log::debug!(
                "{}: retarget {:?} -> {:?} from {:?}",
                inner.label,
                inner.target,
                target,
                inner.current
            );
            inner.target = target;
            inner.spec = spec;
            inner.trajectory = None;
            inner.pending_start = true;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&self, target: T) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        let components = target.to_vector().len();
        inner.current = target.clone();
        inner.target = target.clone();
        inner.velocity = smallvec![0.0; components];
        inner.trajectory = None;
        inner.pending_start = false;
        inner.state.set(target);
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn velocity(&self) -> AnimationVector {
        self.inner.borrow().velocity.clone()
    }

    /// Return the current animation target.
    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    /// Return the animation spec currently driving this animatable.
    pub fn spec(&self) -> AnimationSpec {
        self.inner.borrow().spec
    }

    /// The trajectory in flight, if it has started.
    pub fn trajectory(&self) -> Option<Trajectory<T>> {
        self.inner.borrow().trajectory.clone()
    }

    pub fn is_running(&self) -> bool {
        let inner = self.inner.borrow();
        inner.pending_start || inner.trajectory.is_some()
    }

    pub fn label(&self) -> &'static str {
        self.inner.borrow().label
    }

    /// Get the current state.
    pub fn state(&self) -> State<T> {
        self.inner.borrow().state.as_state()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.frame_clock()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            if let Some(mut registration) = inner.registration.take() {
                registration.mark_fired();
            }

            if inner.pending_start {
                inner.pending_start = false;
                inner.trajectory = Some(Trajectory::with_initial_velocity(
                    inner.current.clone(),
                    inner.velocity.clone(),
                    inner.target.clone(),
                    inner.spec,
                    frame_time_nanos,
                ));
            }

            match inner.trajectory.clone() {
                None => false,
                Some(trajectory) => {
                    let finished = trajectory.is_finished_at(frame_time_nanos);
                    let value = trajectory.value_at(frame_time_nanos);
                    inner.velocity = trajectory.velocity_at(frame_time_nanos);
                    if value != inner.current {
                        inner.current = value.clone();
                        inner.state.set(value);
                    }
                    if finished {
                        log::debug!("{}: settled at {:?}", inner.label, inner.current);
                        inner.trajectory = None;
                        // Settling flips `is_running`, which renders observe.
                        inner.runtime.invalidate();
                    }
                    !finished
                }
            }
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl<T: VectorConvertible> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: VectorConvertible> std::fmt::Debug for Animatable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Animatable")
            .field("label", &inner.label)
            .field("current", &inner.current)
            .field("target", &inner.target)
            .field("running", &(inner.pending_start || inner.trajectory.is_some()))
            .finish()
    }
}
