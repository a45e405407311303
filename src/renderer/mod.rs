use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, trace, warn};

use crate::engine::{Module, ProcessTime};
use crate::scene::SharedScene;

pub mod rendering_view;

pub use rendering_view::RenderingView;

pub type SharedRenderer = Rc<RefCell<Renderer>>;

/// Owns the rendering views and the scene they draw.
///
/// Nothing is drawn until a scene root is set and at least one view exists.
pub struct Renderer {
    views: Vec<RenderingView>,
    scene_root: Option<SharedScene>,
    frames_rendered: u64,
    warned_not_ready: bool,
}

impl Renderer {
    pub fn new() -> Renderer {
        Renderer {
            views: Vec::new(),
            scene_root: None,
            frames_rendered: 0,
            warned_not_ready: false,
        }
    }

    pub fn add_rendering_view(&mut self, view: RenderingView) {
        self.views.push(view);
        debug!("Added rendering view ({} total)", self.views.len());
    }

    pub fn rendering_views(&self) -> &[RenderingView] {
        &self.views
    }

    /// Replaces any previous root.
    pub fn set_scene_root(&mut self, scene: SharedScene) {
        if self.scene_root.replace(scene).is_some() {
            debug!("Replaced scene root");
        }
        self.warned_not_ready = false;
    }

    pub fn scene_root(&self) -> Option<&SharedScene> {
        self.scene_root.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.scene_root.is_some() && !self.views.is_empty()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Renderer {
    fn name(&self) -> &str {
        "renderer"
    }

    fn initialize(&mut self) {
        info!(
            "Renderer initialized with {} view(s), scene root set: {}",
            self.views.len(),
            self.scene_root.is_some()
        );
    }

    fn process(&mut self, _time: &ProcessTime) {
        let Some(scene) = &self.scene_root else {
            if !self.warned_not_ready {
                warn!("No scene root set; skipping rendering");
                self.warned_not_ready = true;
            }
            return;
        };
        if self.views.is_empty() {
            if !self.warned_not_ready {
                warn!("No rendering views; skipping rendering");
                self.warned_not_ready = true;
            }
            return;
        }

        let scene = scene.borrow();
        let drawn: usize = self.views.iter_mut().map(|view| view.render(&scene)).sum();
        self.frames_rendered += 1;
        trace!("Frame {} drew {} nodes", self.frames_rendered, drawn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{Frame, Viewport};
    use crate::scene::SceneNode;

    fn view() -> RenderingView {
        let frame = Rc::new(RefCell::new(Frame::new(800, 600, 32)));
        RenderingView::new(Viewport::new(frame))
    }

    #[test]
    fn skips_rendering_until_ready() {
        let mut renderer = Renderer::new();
        renderer.process(&ProcessTime::default());
        assert_eq!(renderer.frames_rendered(), 0);

        renderer.add_rendering_view(view());
        renderer.process(&ProcessTime::default());
        assert!(!renderer.is_ready());
        assert_eq!(renderer.frames_rendered(), 0);

        renderer.set_scene_root(SceneNode::new().into_shared());
        renderer.process(&ProcessTime::default());
        assert!(renderer.is_ready());
        assert_eq!(renderer.frames_rendered(), 1);
    }

    #[test]
    fn scene_root_is_replaceable() {
        let mut renderer = Renderer::new();
        let first = SceneNode::new().into_shared();
        let second = SceneNode::new().into_shared();

        renderer.set_scene_root(Rc::clone(&first));
        renderer.set_scene_root(Rc::clone(&second));

        let root = renderer.scene_root().expect("scene root");
        assert!(Rc::ptr_eq(root, &second));
        assert!(!Rc::ptr_eq(root, &first));
    }
}
