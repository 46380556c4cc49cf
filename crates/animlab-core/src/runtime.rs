use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::frame_clock::FrameClock;
use crate::state::MutableState;

pub type FrameCallbackId = u64;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct RuntimeInner {
    invalidated: Cell<bool>,
    invalidation_count: Cell<u64>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<u64>,
    last_frame_nanos: Cell<Option<u64>>,
}

impl RuntimeInner {
    fn new() -> Self {
        Self {
            // The first render is always pending.
            invalidated: Cell::new(true),
            invalidation_count: Cell::new(0),
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
            last_frame_nanos: Cell::new(None),
        }
    }

    fn invalidate(&self) {
        self.invalidated.set(true);
        self.invalidation_count
            .set(self.invalidation_count.get().wrapping_add(1));
    }

    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        // Callbacks registered while draining belong to the next frame.
        let mut callbacks = self.frame_callbacks.borrow_mut();
        let mut pending: Vec<Box<dyn FnOnce(u64) + 'static>> = Vec::with_capacity(callbacks.len());
        while let Some(mut entry) = callbacks.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push(callback);
            }
        }
        drop(callbacks);
        self.last_frame_nanos.set(Some(frame_time_nanos));
        let count = pending.len();
        for callback in pending {
            callback(frame_time_nanos);
        }
        log::trace!("frame {frame_time_nanos}ns ran {count} callbacks");
        count
    }
}

/// Owner of the single-threaded runtime state.
///
/// Dropping the runtime turns every outstanding [`RuntimeHandle`] inert:
/// state writes still land in their cells but no longer invalidate anything
/// and frame callbacks are never scheduled.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new()),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    /// A handle that is not attached to any runtime.
    pub fn detached() -> Self {
        Self { inner: Weak::new() }
    }

    /// Marks the current render as stale.
    pub fn invalidate(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.invalidate();
        }
    }

    pub fn is_invalidated(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.invalidated.get())
            .unwrap_or(false)
    }

    /// Clears the invalidation flag, returning whether it was set.
    pub fn take_invalidation(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.invalidated.replace(false))
            .unwrap_or(false)
    }

    /// Total number of invalidations since the runtime was created.
    pub fn invalidation_count(&self) -> u64 {
        self.inner
            .upgrade()
            .map(|inner| inner.invalidation_count.get())
            .unwrap_or(0)
    }

    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    /// Runs every callback registered before this call with the frame time.
    /// Returns how many callbacks ran.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        self.inner
            .upgrade()
            .map(|inner| inner.drain_frame_callbacks(frame_time_nanos))
            .unwrap_or(0)
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    /// True while there is a pending render or a running animation.
    pub fn needs_frame(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.invalidated.get() || inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    /// Time of the most recently drained frame.
    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.last_frame_nanos.get())
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    /// Allocates a state holder bound to this runtime.
    pub fn mutable_state<T: Clone + 'static>(&self, value: T) -> MutableState<T> {
        MutableState::with_runtime(value, self.clone())
    }
}
