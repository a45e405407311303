use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use tracing::{debug, info};
use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::core::Event;
use crate::engine::{Module, ProcessTime};

pub type SharedInput = Rc<RefCell<Input>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub sym: KeyCode,
    pub state: ElementState,
}

impl KeyboardEvent {
    pub fn pressed(sym: KeyCode) -> Self {
        KeyboardEvent {
            sym,
            state: ElementState::Pressed,
        }
    }

    pub fn released(sym: KeyCode) -> Self {
        KeyboardEvent {
            sym,
            state: ElementState::Released,
        }
    }
}

/// Keyboard module. Collects key events from the window and hands them to
/// its listeners on the next tick.
#[derive(Default)]
pub struct Input {
    pending: VecDeque<KeyboardEvent>,
    keys_pressed: HashSet<KeyCode>,
    key_down_event: Event<KeyboardEvent>,
    key_up_event: Event<KeyboardEvent>,
}

impl Input {
    pub fn new() -> Self {
        Input::default()
    }

    pub fn key_down_event(&mut self) -> &mut Event<KeyboardEvent> {
        &mut self.key_down_event
    }

    pub fn key_up_event(&mut self) -> &mut Event<KeyboardEvent> {
        &mut self.key_up_event
    }

    pub fn push_key(&mut self, event: KeyboardEvent) {
        self.pending.push_back(event);
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Notifies listeners of every queued event, oldest first.
    pub fn dispatch_pending(&mut self) {
        while let Some(event) = self.pending.pop_front() {
            match event.state {
                ElementState::Pressed => {
                    self.keys_pressed.insert(event.sym);
                    self.key_down_event.notify(&event);
                }
                ElementState::Released => {
                    self.keys_pressed.remove(&event.sym);
                    self.key_up_event.notify(&event);
                }
            }
        }
    }

    pub fn handle_keyboard_input(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(sym) = event.physical_key else {
            debug!("Ignoring unidentified key {:?}", event.physical_key);
            return;
        };
        debug!("Keyboard input for key {:?} with state {:?}", sym, event.state);
        self.push_key(KeyboardEvent {
            sym,
            state: event.state,
        });
    }
}

impl Module for Input {
    fn name(&self) -> &str {
        "input"
    }

    fn initialize(&mut self) {
        info!(
            "Input ready ({} key-down, {} key-up listeners)",
            self.key_down_event.len(),
            self.key_up_event.len()
        );
    }

    fn process(&mut self, _time: &ProcessTime) {
        self.dispatch_pending();
    }

    fn deinitialize(&mut self) {
        self.pending.clear();
        self.keys_pressed.clear();
    }

    fn handle_window_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            self.handle_keyboard_input(event);
        }
    }
}
