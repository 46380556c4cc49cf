//! Application shell: owns the runtime, the active screen and the renderer,
//! and turns state changes into new scenes.

mod error;
mod frame_stats;
mod screen;
mod theme;

pub use error::ShellError;
pub use frame_stats::FrameStats;
pub use screen::Screen;
pub use theme::Theme;

// Use web_time for cross-platform time support (native + WASM)
use web_time::Instant;

use animlab_core::{Runtime, RuntimeHandle};
use animlab_render_common::{RenderScene, Renderer};
use animlab_ui::{log_layout_tree, LayoutEngine, LayoutTree, TextMeasurer};
use animlab_ui_graphics::Size;

/// Upper bound on frames pumped by [`AppShell::run_until_idle`].
pub const MAX_IDLE_FRAMES: usize = 10_000;

/// Surface parameters the shell lays screens out against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellConfig {
    pub viewport: Size,
    pub density: f32,
    pub theme: Theme,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(412.0, 915.0),
            density: 1.0,
            theme: Theme::light(),
        }
    }
}

pub struct AppShell<S, R>
where
    S: Screen,
    R: Renderer<S::Action>,
{
    runtime: Runtime,
    screen: S,
    renderer: R,
    engine: LayoutEngine,
    theme: Theme,
    viewport: Size,
    start_time: Instant,
    layout_tree: Option<LayoutTree<S::Action>>,
    stats: FrameStats,
}

impl<S, R> AppShell<S, R>
where
    S: Screen,
    R: Renderer<S::Action>,
{
    /// Builds the screen against a fresh runtime and renders the first frame.
    pub fn new(
        renderer: R,
        config: ShellConfig,
        build: impl FnOnce(&RuntimeHandle) -> S,
    ) -> Result<Self, ShellError> {
        let runtime = Runtime::new();
        let screen = build(&runtime.handle());
        let engine = LayoutEngine::new(config.density)?;
        let mut shell = Self {
            runtime,
            screen,
            renderer,
            engine,
            theme: config.theme,
            viewport: config.viewport,
            start_time: Instant::now(),
            layout_tree: None,
            stats: FrameStats::default(),
        };
        log::debug!("shell started with screen '{}'", shell.screen.title());
        shell.render()?;
        Ok(shell)
    }

    /// Replaces the text measurer used by layout and re-renders.
    pub fn set_text_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.engine.set_measurer(measurer);
        self.runtime.handle().invalidate();
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        self.runtime.handle().invalidate();
        &mut self.screen
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.runtime.handle().invalidate();
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
        self.runtime.handle().invalidate();
    }

    pub fn scene(&self) -> &R::Scene {
        self.renderer.scene()
    }

    pub fn renderer(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Layout of the last rendered frame.
    pub fn layout_tree(&self) -> Option<&LayoutTree<S::Action>> {
        self.layout_tree.as_ref()
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// True while a render is pending or an animation is running.
    pub fn needs_frame(&self) -> bool {
        self.runtime.handle().needs_frame()
    }

    /// Runs one frame on the wall clock.
    pub fn update(&mut self) -> Result<bool, ShellError> {
        let frame_time = Instant::now()
            .checked_duration_since(self.start_time)
            .unwrap_or_default()
            .as_nanos() as u64;
        self.update_at(frame_time)
    }

    /// Runs one frame at `frame_time_nanos`: drains frame callbacks, then
    /// re-renders if anything was invalidated. Returns whether it rendered.
    /// Times earlier than the previous frame are clamped to it.
    pub fn update_at(&mut self, frame_time_nanos: u64) -> Result<bool, ShellError> {
        let frame_time = self
            .stats
            .last_frame_nanos()
            .map_or(frame_time_nanos, |last| frame_time_nanos.max(last));
        let handle = self.runtime.handle();
        handle.drain_frame_callbacks(frame_time);
        self.stats.record_frame(frame_time);
        if handle.is_invalidated() {
            self.render()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Pumps frames `frame_interval_nanos` apart until nothing is pending.
    /// Returns the number of frames run.
    pub fn run_until_idle(&mut self, frame_interval_nanos: u64) -> Result<usize, ShellError> {
        let mut frame_time = self.stats.last_frame_nanos().unwrap_or(0);
        let mut frames = 0;
        while self.needs_frame() {
            if frames >= MAX_IDLE_FRAMES {
                log::warn!("still animating after {MAX_IDLE_FRAMES} frames");
                break;
            }
            frame_time += frame_interval_nanos;
            self.update_at(frame_time)?;
            frames += 1;
        }
        log::trace!("idle after {frames} frames");
        Ok(frames)
    }

    /// Re-evaluates the screen and rebuilds layout and scene.
    pub fn render(&mut self) -> Result<(), ShellError> {
        let handle = self.runtime.handle();
        self.screen.sync();
        handle.take_invalidation();

        let root = self.screen.render(&self.theme);
        let layout = self.engine.compute_layout(&root, self.viewport)?;
        self.renderer
            .rebuild_scene(&layout, self.viewport)
            .map_err(|err| ShellError::Render(Box::new(err)))?;
        if log::log_enabled!(log::Level::Trace) {
            log_layout_tree(&layout);
        }
        self.layout_tree = Some(layout);
        self.stats.record_render();
        log::debug!(
            "rendered '{}' ({} nodes)",
            self.screen.title(),
            root.node_count()
        );
        Ok(())
    }

    /// Hands `action` to the screen and schedules a render.
    pub fn dispatch(&mut self, action: &S::Action) {
        log::debug!("dispatching {action:?}");
        self.screen.on_action(action);
        self.runtime.handle().invalidate();
    }

    /// Taps the topmost clickable target under the point in the last scene.
    pub fn click_at(&mut self, x: f32, y: f32) -> bool {
        match self.renderer.scene().action_at(x, y) {
            Some(action) => {
                self.dispatch(&action);
                true
            }
            None => {
                log::debug!("tap at ({x}, {y}) hit nothing");
                false
            }
        }
    }

    /// Taps the center of the element tagged `tag`.
    pub fn click_tag(&mut self, tag: &str) -> bool {
        let center = self
            .layout_tree
            .as_ref()
            .and_then(|layout| layout.find_by_tag(tag))
            .map(|found| found.rect.center());
        match center {
            Some(center) => self.click_at(center.x, center.y),
            None => false,
        }
    }

    /// Taps the clickable element labelled `text`.
    pub fn click_text(&mut self, text: &str) -> bool {
        let action = self
            .layout_tree
            .as_ref()
            .and_then(|layout| layout.clickable_for_text(text))
            .map(|target| target.action.clone());
        match action {
            Some(action) => {
                self.dispatch(&action);
                true
            }
            None => {
                log::warn!("no clickable element labelled '{text}'");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/app_shell_tests.rs"]
mod tests;
