//! Core runtime for animlab: discrete state holders, invalidation and the
//! frame clock that drives every running animation.
//!
//! Everything here is single threaded. A [`Runtime`] is owned by the shell
//! (or by a test) and handed out as cheap [`RuntimeHandle`]s.

mod frame_clock;
mod runtime;
mod state;

pub use frame_clock::{FrameClock, FrameCallbackRegistration};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
pub use state::{MutableState, State};

/// Nanoseconds in one millisecond.
pub const NANOS_PER_MILLI: u64 = 1_000_000;

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::runtime::{Runtime, RuntimeHandle};
    pub use crate::state::{MutableState, State};
}

#[cfg(test)]
#[path = "tests/core_tests.rs"]
mod tests;
