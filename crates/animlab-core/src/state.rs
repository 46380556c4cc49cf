use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::runtime::RuntimeHandle;

struct StateCell<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    runtime: RuntimeHandle,
}

/// A discrete state holder.
///
/// Assignment is last-write-wins and always succeeds; every write bumps the
/// version and invalidates the owning runtime so the next frame re-renders.
/// Clones share the same cell.
pub struct MutableState<T: Clone + 'static> {
    inner: Rc<StateCell<T>>,
}

/// Read-only view of a [`MutableState`].
pub struct State<T: Clone + 'static> {
    inner: Rc<StateCell<T>>,
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(StateCell {
                value: RefCell::new(value),
                version: Cell::new(0),
                runtime,
            }),
        }
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn value(&self) -> T {
        self.get()
    }

    pub fn set(&self, value: T) {
        self.replace(value);
    }

    /// Stores `value` and returns the previous one.
    pub fn replace(&self, value: T) -> T {
        let previous = self.inner.value.replace(value);
        self.mark_written();
        previous
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.inner.value.borrow_mut());
        self.mark_written();
        result
    }

    /// Number of writes so far.
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    fn mark_written(&self) {
        self.inner.version.set(self.inner.version.get() + 1);
        self.inner.runtime.invalidate();
    }
}

impl<T: Clone + 'static> State<T> {
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn value(&self) -> T {
        self.get()
    }

    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }
}

impl<T: Clone + 'static> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> PartialEq for MutableState<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> Eq for MutableState<T> {}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.inner.value.borrow())
            .field("version", &self.inner.version.get())
            .finish()
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &*self.inner.value.borrow())
            .finish()
    }
}
