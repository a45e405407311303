use std::rc::Rc;

use winit::keyboard::KeyCode;

use crate::core::Listener;
use crate::engine::EngineControl;
use crate::hello;
use crate::input::KeyboardEvent;

/// Stops the engine when Escape is released.
///
/// Subscribe it to the input module's key-up stream; it only looks at the key
/// symbol. Before stopping it runs the example payload, [`hello::world`]
/// unless another one is given.
pub struct QuitHandler {
    engine: Rc<dyn EngineControl>,
    quit_key: KeyCode,
    payload: Box<dyn FnMut()>,
}

impl QuitHandler {
    pub fn new(engine: Rc<dyn EngineControl>) -> Self {
        Self::with_payload(engine, hello::world)
    }

    pub fn with_payload(engine: Rc<dyn EngineControl>, payload: impl FnMut() + 'static) -> Self {
        QuitHandler {
            engine,
            quit_key: KeyCode::Escape,
            payload: Box::new(payload),
        }
    }
}

impl Listener<KeyboardEvent> for QuitHandler {
    fn handle(&mut self, event: &KeyboardEvent) {
        if event.sym == self.quit_key {
            (self.payload)();
            self.engine.stop();
        }
    }
}
