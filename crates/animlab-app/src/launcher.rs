//! Application launcher.
//!
//! The launcher owns the [`AppSettings`], builds the shell for the selected
//! [`Example`] and hands it to the console surface.

use std::fmt::Debug;
use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use animlab_app_shell::{AppShell, Screen, ShellConfig, ShellError, Theme};
use animlab_core::RuntimeHandle;
use animlab_render_common::HeadlessRenderer;
use animlab_ui_graphics::Size;
use thiserror::Error;

/// One selectable screen of an application.
pub trait Example: Copy + Debug + Default {
    type Action: Clone + PartialEq + Debug + 'static;

    fn name(self) -> &'static str;

    fn build(self, runtime: &RuntimeHandle) -> Box<dyn Screen<Action = Self::Action>>;
}

/// Shell hosting the boxed screen of an [`Example`].
pub type ExampleShell<E> = AppShell<
    Box<dyn Screen<Action = <E as Example>::Action>>,
    HeadlessRenderer<<E as Example>::Action>,
>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Shell(#[from] ShellError),
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for application settings.
#[derive(Clone, Debug)]
pub struct AppSettings<E> {
    pub title: String,
    pub example: E,
    /// Surface size in logical pixels.
    pub viewport: Size,
    pub density: f32,
    pub frame_interval: Duration,
    pub theme: Theme,
}

impl<E: Default> Default for AppSettings<E> {
    fn default() -> Self {
        Self {
            title: "Lab13".into(),
            example: E::default(),
            viewport: Size::new(412.0, 915.0),
            density: 1.0,
            frame_interval: Duration::from_millis(16),
            theme: Theme::light(),
        }
    }
}

impl<E> AppSettings<E> {
    pub fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            viewport: self.viewport,
            density: self.density,
            theme: self.theme,
        }
    }

    pub fn frame_interval_nanos(&self) -> u64 {
        (self.frame_interval.as_nanos() as u64).max(1)
    }
}

/// Builder that configures and launches an application.
///
/// ```ignore
/// fn main() -> ExitCode {
///     animlab_app::init_logging();
///     AppLauncher::<MyExamples>::new()
///         .with_title("My App")
///         .with_example(MyExamples::Counter)
///         .run()
/// }
/// ```
pub struct AppLauncher<E: Example> {
    settings: AppSettings<E>,
}

impl<E: Example> AppLauncher<E> {
    pub fn new() -> Self {
        Self {
            settings: AppSettings::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings.title = title.into();
        self
    }

    pub fn with_example(mut self, example: E) -> Self {
        self.settings.example = example;
        self
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.settings.viewport = Size::new(width, height);
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.settings.density = density;
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.settings.frame_interval = interval;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.settings.theme = theme;
        self
    }

    pub fn settings(&self) -> &AppSettings<E> {
        &self.settings
    }

    /// Builds the shell for the selected example and renders its first frame.
    pub fn build_shell(&self) -> Result<ExampleShell<E>, AppError> {
        let example = self.settings.example;
        log::info!(
            "launching '{}' with example {}",
            self.settings.title,
            example.name()
        );
        let shell = AppShell::new(
            HeadlessRenderer::new(),
            self.settings.shell_config(),
            |runtime| example.build(runtime),
        )?;
        Ok(shell)
    }

    /// Runs the console surface over `input` and `output`.
    pub fn run_with(&self, input: impl BufRead, output: &mut impl Write) -> Result<(), AppError> {
        let mut shell = self.build_shell()?;
        crate::run_console(&mut shell, &self.settings, input, output)
    }

    /// Runs on stdin/stdout. Failures are logged and reported through the
    /// exit code.
    pub fn run(self) -> ExitCode {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        match self.run_with(stdin.lock(), &mut stdout) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::error!("{} stopped: {err}", self.settings.title);
                ExitCode::FAILURE
            }
        }
    }
}

impl<E: Example> Default for AppLauncher<E> {
    fn default() -> Self {
        Self::new()
    }
}
