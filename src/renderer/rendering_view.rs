use glam::Mat4;
use tracing::trace;

use crate::display::Viewport;
use crate::scene::SceneNode;

/// Draws a scene into one viewport.
pub struct RenderingView {
    viewport: Viewport,
    view_projection: Mat4,
}

impl RenderingView {
    pub fn new(viewport: Viewport) -> Self {
        RenderingView {
            viewport,
            view_projection: Mat4::IDENTITY,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Matrix used for the most recent render.
    pub fn view_projection(&self) -> Mat4 {
        self.view_projection
    }

    /// Returns the number of nodes drawn.
    pub fn render(&mut self, scene: &SceneNode) -> usize {
        self.view_projection = self.viewport.view_projection().unwrap_or(Mat4::IDENTITY);
        let nodes = scene.node_count();
        trace!(
            "Rendered {} nodes into viewport {:?}",
            nodes,
            self.viewport.dimensions()
        );
        nodes
    }
}
