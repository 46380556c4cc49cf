//! Common rendering contracts shared between renderer backends, plus the
//! headless backend that records a draw list.

mod pipeline;
pub mod scene;

use animlab_ui::LayoutTree;
use animlab_ui_graphics::Size;
use thiserror::Error;

pub use scene::{DrawShape, HitRegion, Scene, TextDraw};

/// Trait implemented by hit-test targets stored inside a [`RenderScene`].
pub trait HitTestTarget {
    type Action;

    /// Action dispatched to the screen when this target is tapped.
    fn action(&self) -> &Self::Action;
}

/// Trait describing the minimal surface area required by the application
/// shell to process taps and refresh the frame graph.
pub trait RenderScene {
    type Action;
    type HitTarget: HitTestTarget<Action = Self::Action> + Clone;

    fn clear(&mut self);

    /// Performs hit testing at the given coordinates.
    /// Returns hit targets ordered by z-index (top-to-bottom).
    fn hit_test(&self, x: f32, y: f32) -> Vec<Self::HitTarget>;

    /// Action of the topmost target at the given coordinates.
    fn action_at(&self, x: f32, y: f32) -> Option<Self::Action>
    where
        Self::Action: Clone,
    {
        self.hit_test(x, y)
            .first()
            .map(|target| target.action().clone())
    }
}

/// Abstraction implemented by concrete renderer backends.
pub trait Renderer<A> {
    type Scene: RenderScene<Action = A>;
    type Error: std::error::Error + 'static;

    fn scene(&self) -> &Self::Scene;
    fn scene_mut(&mut self) -> &mut Self::Scene;

    fn rebuild_scene(
        &mut self,
        layout_tree: &LayoutTree<A>,
        viewport: Size,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("viewport must be finite and non-negative, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("{kind} node has non-finite geometry")]
    NonFiniteGeometry { kind: &'static str },
}

/// Renderer that records the scene without drawing pixels.
#[derive(Debug)]
pub struct HeadlessRenderer<A> {
    scene: Scene<A>,
}

impl<A> HeadlessRenderer<A> {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }
}

impl<A> Default for HeadlessRenderer<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Renderer<A> for HeadlessRenderer<A> {
    type Scene = Scene<A>;
    type Error = RenderError;

    fn scene(&self) -> &Self::Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Self::Scene {
        &mut self.scene
    }

    fn rebuild_scene(
        &mut self,
        layout_tree: &LayoutTree<A>,
        viewport: Size,
    ) -> Result<(), Self::Error> {
        let valid = |extent: f32| extent.is_finite() && extent >= 0.0;
        if !valid(viewport.width) || !valid(viewport.height) {
            return Err(RenderError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.scene.clear();
        pipeline::render_layout_tree(layout_tree.root(), &mut self.scene)?;
        log::trace!(
            "scene rebuilt: {} shapes, {} texts, {} hit regions",
            self.scene.shapes.len(),
            self.scene.texts.len(),
            self.scene.hits.len()
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/headless_tests.rs"]
mod tests;
