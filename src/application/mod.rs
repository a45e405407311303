use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::{
    config::GameConfig,
    display::{Frame, SharedFrame, ViewingVolume, Viewport},
    engine::{GameEngine, GameFactory},
    input::{Input, SharedInput},
    renderer::{Renderer, RenderingView, SharedRenderer},
    resource_manager::ResourceManager,
    scene::{SceneNode, SharedScene},
    statistics::Statistics,
};

pub mod quit;

pub use quit::QuitHandler;

pub type SharedStatistics = Rc<RefCell<Statistics>>;

/// The example game's composition root.
///
/// Construction builds the frame, a camera-bound viewport and a renderer
/// drawing into it. [`GameFactory::setup_engine`] adds input, an empty
/// scene, the Escape quit handler and frame statistics.
///
/// Everything made during setup is owned by `resources` and released newest
/// first, before the renderer and then the frame.
pub struct ExampleFactory {
    resources: ResourceManager,
    renderer: SharedRenderer,
    frame: SharedFrame,
    config: GameConfig,
}

impl ExampleFactory {
    pub fn new() -> ExampleFactory {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> ExampleFactory {
        let frame = Rc::new(RefCell::new(Frame::from_config(&config.frame)));

        // Main viewport, with the camera bound to it
        let mut viewport = Viewport::new(Rc::clone(&frame));
        viewport.set_viewing_volume(ViewingVolume::new());

        let mut renderer = Renderer::new();
        renderer.add_rendering_view(RenderingView::new(viewport));

        info!(
            "Game factory created a {}x{}x{} frame",
            config.frame.width, config.frame.height, config.frame.depth
        );
        ExampleFactory {
            resources: ResourceManager::new(),
            renderer: Rc::new(RefCell::new(renderer)),
            frame,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn input(&self) -> Option<SharedInput> {
        self.resources.get::<SharedInput>().cloned()
    }

    pub fn scene(&self) -> Option<SharedScene> {
        self.resources.get::<SharedScene>().cloned()
    }

    pub fn statistics(&self) -> Option<SharedStatistics> {
        self.resources.get::<SharedStatistics>().cloned()
    }
}

impl Default for ExampleFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameFactory for ExampleFactory {
    /// Always returns `true`.
    fn setup_engine(&mut self, engine: &mut dyn GameEngine) -> bool {
        let input: SharedInput = Rc::new(RefCell::new(Input::new()));
        engine.add_module(input.clone());
        self.resources.add(Rc::clone(&input));

        let scene = SceneNode::new().into_shared();
        self.renderer.borrow_mut().set_scene_root(Rc::clone(&scene));
        self.resources.add(scene);

        // The handler only fires once the input module receives key events
        let quit = QuitHandler::new(engine.control());
        input.borrow_mut().key_up_event().add(Box::new(quit));

        let statistics: SharedStatistics = Rc::new(RefCell::new(Statistics::new(
            self.config.statistics_interval_ms,
        )));
        engine.add_module(statistics.clone());
        self.resources.add(statistics);

        true
    }

    fn frame(&self) -> SharedFrame {
        Rc::clone(&self.frame)
    }

    fn renderer(&self) -> SharedRenderer {
        Rc::clone(&self.renderer)
    }
}
