use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};
use winit::event::WindowEvent;

use crate::display::SharedFrame;
use crate::renderer::SharedRenderer;

/// A pluggable engine subsystem that receives per-tick callbacks.
pub trait Module {
    fn name(&self) -> &str;

    fn initialize(&mut self) {}

    fn process(&mut self, time: &ProcessTime);

    fn deinitialize(&mut self) {}

    /// Window events are fanned out to every module before the next tick.
    fn handle_window_event(&mut self, _event: &WindowEvent) {}
}

pub type SharedModule = Rc<RefCell<dyn Module>>;

/// Timing information for a single engine tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProcessTime {
    pub delta: Duration,
    pub elapsed: Duration,
    pub tick: u64,
}

/// Lets a component command the engine without holding the engine itself.
pub trait EngineControl {
    fn stop(&self);

    fn is_running(&self) -> bool;
}

/// The engine surface a [`GameFactory`] sees during setup.
pub trait GameEngine {
    fn add_module(&mut self, module: SharedModule);

    fn control(&self) -> Rc<dyn EngineControl>;
}

/// Builds the long-lived display and renderer, then registers the game's
/// own modules once the engine asks for them.
pub trait GameFactory {
    /// Returns `false` if the engine should not start. Reserved; no current
    /// factory produces it.
    fn setup_engine(&mut self, engine: &mut dyn GameEngine) -> bool;

    fn frame(&self) -> SharedFrame;

    fn renderer(&self) -> SharedRenderer;
}

#[derive(Debug, Clone, Default)]
pub struct EngineHandle {
    running: Rc<Cell<bool>>,
    stop_requested: Rc<Cell<bool>>,
}

impl EngineHandle {
    fn stop_requested(&self) -> bool {
        self.stop_requested.get()
    }
}

impl EngineControl for EngineHandle {
    /// Sticky: a stop issued before the engine runs keeps it from starting.
    fn stop(&self) {
        if !self.stop_requested.replace(true) {
            info!("Engine stop requested");
        }
        self.running.set(false);
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Running,
    Stopped,
}

/// Minimal host loop: owns the registered modules and ticks them in
/// registration order until something calls [`EngineControl::stop`].
pub struct Engine {
    modules: Vec<SharedModule>,
    frame: Option<SharedFrame>,
    handle: EngineHandle,
    phase: Phase,
    factory_started: bool,
    started_at: Option<Instant>,
    last_tick: Option<Instant>,
    tick: u64,
}

impl Engine {
    pub fn new() -> Engine {
        Engine {
            modules: Vec::new(),
            frame: None,
            handle: EngineHandle::default(),
            phase: Phase::Created,
            factory_started: false,
            started_at: None,
            last_tick: None,
            tick: 0,
        }
    }

    /// Registers the factory's frame and renderer, then lets the factory
    /// add its own modules. Only the first call on a fresh engine does
    /// anything.
    pub fn start(&mut self, factory: &mut dyn GameFactory) -> bool {
        if self.phase != Phase::Created || self.factory_started {
            warn!("Engine already started; ignoring game factory");
            return false;
        }
        self.factory_started = true;

        let frame = factory.frame();
        self.add_module(frame.clone());
        self.frame = Some(frame);
        self.add_module(factory.renderer());

        if !factory.setup_engine(self) {
            warn!("Game factory setup failed; engine will not start");
            return false;
        }
        info!("Engine set up with {} modules", self.modules.len());
        true
    }

    pub fn initialize(&mut self) {
        if self.phase != Phase::Created {
            return;
        }
        if self.handle.stop_requested() {
            info!("Stop requested before initialization; engine will not run");
            self.phase = Phase::Stopped;
            return;
        }
        for module in &self.modules {
            let mut module = module.borrow_mut();
            debug!("Initializing module {}", module.name());
            module.initialize();
        }
        self.handle.running.set(true);
        self.phase = Phase::Running;
        self.started_at = Some(Instant::now());
        info!("Engine running");
    }

    /// Processes every module once. Returns whether the engine is still
    /// running afterwards.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running || !self.handle.is_running() {
            return false;
        }

        let now = Instant::now();
        let delta = self.last_tick.map_or(Duration::ZERO, |last| now - last);
        let elapsed = self.started_at.map_or(Duration::ZERO, |start| now - start);
        self.last_tick = Some(now);
        self.tick_with(ProcessTime {
            delta,
            elapsed,
            tick: self.tick,
        })
    }

    /// Like [`Engine::tick`] but with caller-supplied timing.
    pub fn tick_with(&mut self, time: ProcessTime) -> bool {
        if self.phase != Phase::Running || !self.handle.is_running() {
            return false;
        }
        trace!("Tick {} (delta {:?})", time.tick, time.delta);
        for module in &self.modules {
            module.borrow_mut().process(&time);
        }
        self.tick = time.tick + 1;
        self.handle.is_running()
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        for module in &self.modules {
            module.borrow_mut().handle_window_event(event);
        }
    }

    pub fn stop(&self) {
        self.handle.stop();
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running && self.handle.is_running()
    }

    /// Deinitializes modules in reverse registration order. Safe to call
    /// more than once.
    pub fn shutdown(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.handle.stop();
        for module in self.modules.iter().rev() {
            let mut module = module.borrow_mut();
            debug!("Deinitializing module {}", module.name());
            module.deinitialize();
        }
        self.phase = Phase::Stopped;
        info!("Engine stopped after {} ticks", self.tick);
    }

    pub fn frame(&self) -> Option<SharedFrame> {
        self.frame.clone()
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

impl GameEngine for Engine {
    fn add_module(&mut self, module: SharedModule) {
        if self.phase != Phase::Created {
            warn!(
                "Module {} added after initialization; ignoring",
                module.borrow().name()
            );
            return;
        }
        debug!("Added module {}", module.borrow().name());
        self.modules.push(module);
    }

    fn control(&self) -> Rc<dyn EngineControl> {
        Rc::new(self.handle.clone())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
