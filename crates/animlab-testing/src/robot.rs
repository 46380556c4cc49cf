//! Robot-style screen testing.
//!
//! [`ScreenTestRule`] hosts one [`Screen`] in an [`AppShell`] with a
//! headless renderer and a manual clock, so a test decides exactly when
//! frames happen:
//!
//! ```ignore
//! let mut rule = ScreenTestRule::new(MyScreen::new);
//! rule.find_by_text("Toggle").click();
//! rule.advance_time_millis(100);
//! rule.wait_for_idle();
//! assert!(rule.find_by_text("Done").exists());
//! ```

use animlab_app_shell::{AppShell, Screen, ShellConfig, ShellError, MAX_IDLE_FRAMES};
use animlab_core::{RuntimeHandle, NANOS_PER_MILLI};
use animlab_render_common::{HeadlessRenderer, Scene};
use animlab_ui::{format_layout_tree, LayoutTree};
use animlab_ui_graphics::{Color, Point, Rect};

/// Frame spacing of the manual clock.
pub const DEFAULT_FRAME_INTERVAL_NANOS: u64 = 16 * NANOS_PER_MILLI;

pub struct ScreenTestRule<S>
where
    S: Screen,
{
    shell: AppShell<S, HeadlessRenderer<S::Action>>,
    now: u64,
    frame_interval: u64,
}

fn frame_failed(err: ShellError) -> ! {
    panic!("frame failed: {err}")
}

impl<S> ScreenTestRule<S>
where
    S: Screen,
{
    pub fn new(build: impl FnOnce(&RuntimeHandle) -> S) -> Self {
        Self::with_config(ShellConfig::default(), build)
    }

    pub fn with_config(config: ShellConfig, build: impl FnOnce(&RuntimeHandle) -> S) -> Self {
        let shell = AppShell::new(HeadlessRenderer::new(), config, build)
            .unwrap_or_else(|err| frame_failed(err));
        Self {
            shell,
            now: 0,
            frame_interval: DEFAULT_FRAME_INTERVAL_NANOS,
        }
    }

    pub fn with_frame_interval_millis(mut self, millis: u64) -> Self {
        self.frame_interval = millis.max(1) * NANOS_PER_MILLI;
        self
    }

    /// Time of the manual clock.
    pub fn now_nanos(&self) -> u64 {
        self.now
    }

    /// Runs one frame. Returns whether the screen re-rendered.
    pub fn advance_frame(&mut self) -> bool {
        self.now += self.frame_interval;
        self.shell
            .update_at(self.now)
            .unwrap_or_else(|err| frame_failed(err))
    }

    /// Runs frames until the clock has moved `millis` forward. The last
    /// frame lands exactly on the target time.
    pub fn advance_time_millis(&mut self, millis: u64) {
        let target = self.now + millis * NANOS_PER_MILLI;
        while self.now < target {
            self.now = (self.now + self.frame_interval).min(target);
            self.shell
                .update_at(self.now)
                .unwrap_or_else(|err| frame_failed(err));
        }
    }

    /// Pumps frames until no render or animation is pending. Returns the
    /// number of frames run.
    pub fn wait_for_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.shell.needs_frame() && frames < MAX_IDLE_FRAMES {
            self.advance_frame();
            frames += 1;
        }
        frames
    }

    /// Taps the clickable element labelled `text` and runs one frame.
    pub fn click_text(&mut self, text: &str) -> bool {
        let hit = self.shell.click_text(text);
        if hit {
            self.advance_frame();
        }
        hit
    }

    /// Taps the topmost target under the point and runs one frame.
    pub fn click_at(&mut self, x: f32, y: f32) -> bool {
        let hit = self.shell.click_at(x, y);
        if hit {
            self.advance_frame();
        }
        hit
    }

    pub fn find_by_text(&mut self, text: &str) -> ElementFinder<'_, S> {
        ElementFinder {
            rule: self,
            query: FinderQuery::Text(text.to_string()),
        }
    }

    pub fn find_by_tag(&mut self, tag: &str) -> ElementFinder<'_, S> {
        ElementFinder {
            rule: self,
            query: FinderQuery::Tag(tag.to_string()),
        }
    }

    /// Texts drawn in the current scene, in paint order.
    pub fn all_texts(&self) -> Vec<String> {
        self.scene()
            .texts
            .iter()
            .map(|draw| draw.text.clone())
            .collect()
    }

    pub fn scene(&self) -> &Scene<S::Action> {
        self.shell.scene()
    }

    pub fn layout_tree(&self) -> Option<&LayoutTree<S::Action>> {
        self.shell.layout_tree()
    }

    pub fn screen(&self) -> &S {
        self.shell.screen()
    }

    pub fn screen_mut(&mut self) -> &mut S {
        self.shell.screen_mut()
    }

    pub fn shell_mut(&mut self) -> &mut AppShell<S, HeadlessRenderer<S::Action>> {
        &mut self.shell
    }

    /// Layout tree and draw list of the current frame.
    pub fn dump_screen(&self) -> String {
        let mut dump = self
            .layout_tree()
            .map(format_layout_tree)
            .unwrap_or_default();
        dump.push_str("=== SCENE ===\n");
        dump.push_str(&self.scene().describe());
        log::debug!("{dump}");
        dump
    }
}

#[derive(Clone, Debug)]
enum FinderQuery {
    Text(String),
    Tag(String),
}

/// Locates one element of the current frame.
pub struct ElementFinder<'a, S>
where
    S: Screen,
{
    rule: &'a mut ScreenTestRule<S>,
    query: FinderQuery,
}

impl<S> ElementFinder<'_, S>
where
    S: Screen,
{
    pub fn exists(&self) -> bool {
        self.bounds().is_some()
    }

    pub fn bounds(&self) -> Option<Rect> {
        match &self.query {
            FinderQuery::Text(text) => self.rule.scene().find_text(text).map(|draw| draw.rect),
            FinderQuery::Tag(tag) => self
                .rule
                .layout_tree()
                .and_then(|layout| layout.find_by_tag(tag))
                .map(|found| found.rect),
        }
    }

    pub fn center(&self) -> Option<Point> {
        self.bounds().map(|rect| rect.center())
    }

    pub fn width(&self) -> Option<f32> {
        self.bounds().map(|rect| rect.width)
    }

    pub fn height(&self) -> Option<f32> {
        self.bounds().map(|rect| rect.height)
    }

    /// Resolved opacity: the text color's alpha for text queries, the
    /// layout alpha for tag queries.
    pub fn alpha(&self) -> Option<f32> {
        match &self.query {
            FinderQuery::Text(text) => self.rule.scene().find_text(text).map(|draw| draw.color.a()),
            FinderQuery::Tag(tag) => self
                .rule
                .layout_tree()
                .and_then(|layout| layout.find_by_tag(tag))
                .map(|found| found.alpha),
        }
    }

    /// Text color for text queries, innermost background for tag queries.
    pub fn color(&self) -> Option<Color> {
        match &self.query {
            FinderQuery::Text(text) => self.rule.scene().find_text(text).map(|draw| draw.color),
            FinderQuery::Tag(tag) => self
                .rule
                .layout_tree()
                .and_then(|layout| layout.find_by_tag(tag))
                .and_then(|found| found.backgrounds.last())
                .map(|background| background.color),
        }
    }

    /// Taps the element. Text queries resolve to the clickable that owns
    /// the label; tag queries tap the element's center.
    pub fn click(&mut self) -> bool {
        match self.query.clone() {
            FinderQuery::Text(text) => self.rule.click_text(&text),
            FinderQuery::Tag(_) => match self.center() {
                Some(center) => self.rule.click_at(center.x, center.y),
                None => false,
            },
        }
    }

    pub fn assert_exists(&self) {
        assert!(self.exists(), "Element not found: {:?}", self.query);
    }

    pub fn assert_not_exists(&self) {
        assert!(
            !self.exists(),
            "Element unexpectedly found: {:?}",
            self.query
        );
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
