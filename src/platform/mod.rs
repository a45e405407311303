use anyhow::Result;

use crate::engine::Engine;

pub mod platform_winit;

/// Defines the contract for a platform layer.
/// Its only job is to take a set-up engine and drive it.
pub trait Platform {
    /// Creates a new platform instance, wrapping the engine.
    fn new(engine: Engine) -> Self
    where
        Self: Sized;

    /// Runs the engine on the current thread until it stops or the window
    /// is closed.
    fn run(&mut self) -> Result<()>;
}
