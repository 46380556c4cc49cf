//! High level utilities for running animlab screens with minimal boilerplate.

mod console;
mod launcher;
mod logging;

pub use console::run_console;
pub use launcher::{AppError, AppLauncher, AppSettings, Example};
pub use logging::init_logging;

#[cfg(test)]
#[path = "tests/launcher_tests.rs"]
mod tests;
