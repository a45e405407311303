use std::sync::Arc;

use anyhow::{Context, Error, Result, anyhow};
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::engine::Engine;
use crate::platform::Platform;

pub struct WinitPlatform {
    engine: Engine,
    window_created: bool,
    failure: Option<Error>,
}

impl WinitPlatform {
    fn finish(&mut self, event_loop: &ActiveEventLoop) {
        self.engine.shutdown();
        event_loop.exit();
    }

    /// Records why the loop is being abandoned; `run` reports it.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        error!("{err:#}");
        self.failure = Some(err);
        self.finish(event_loop);
    }

    /// Turns a recorded failure into the result of `run`.
    fn take_result(&mut self) -> Result<()> {
        match self.failure.take() {
            Some(err) => Err(err.context("platform stopped before the engine could run")),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for WinitPlatform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_created {
            return;
        }
        let Some(frame) = self.engine.frame() else {
            self.fail(event_loop, anyhow!("engine has no frame to open"));
            return;
        };

        let attributes = frame.borrow().window_attributes();
        let winit_window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.fail(event_loop, Error::new(err).context("failed to create window"));
                return;
            }
        };
        info!("Created window with ID: {:?}", winit_window.id());
        frame.borrow_mut().set_window(winit_window);
        self.window_created = true;

        self.engine.initialize();
        frame.borrow().request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("The close button was pressed; stopping");
                self.finish(event_loop);
            }
            WindowEvent::RedrawRequested => {
                if !self.engine.tick() {
                    info!("Engine stopped; leaving event loop");
                    self.finish(event_loop);
                    return;
                }
                if let Some(frame) = self.engine.frame() {
                    frame.borrow().request_redraw();
                }
            }
            other => self.engine.handle_window_event(&other),
        }
    }
}

impl Platform for WinitPlatform {
    fn new(engine: Engine) -> Self {
        Self {
            engine,
            window_created: false,
            failure: None,
        }
    }

    fn run(&mut self) -> Result<()> {
        info!("Starting event loop...");

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop
            .run_app(self)
            .context("event loop terminated with an error")?;
        self.take_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_exit_reports_success() {
        let mut platform = WinitPlatform::new(Engine::new());
        assert!(platform.take_result().is_ok());
    }

    #[test]
    fn recorded_failure_is_returned_from_run() {
        let mut platform = WinitPlatform::new(Engine::new());
        platform.failure = Some(anyhow!("failed to create window"));

        let err = platform.take_result().expect_err("failure must surface");
        assert!(format!("{err:#}").contains("failed to create window"));
        assert!(platform.take_result().is_ok());
    }
}
