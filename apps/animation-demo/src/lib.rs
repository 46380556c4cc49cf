pub mod app;

use std::process::ExitCode;

use animlab_app::AppLauncher;
use animlab_app_shell::Theme;

pub use app::{DemoAction, DemoExample};

/// Launcher configured the way the binary runs it.
pub fn create_app() -> AppLauncher<DemoExample> {
    AppLauncher::new()
        .with_title("Lab13")
        .with_viewport(412.0, 915.0)
        .with_theme(Theme::light())
}

/// Shared entry point: runs the default example on the console surface.
pub fn entry_point() -> ExitCode {
    animlab_app::init_logging();
    create_app().run()
}
