use anyhow::{Result, bail};
use tracing::info;

use hello_factory::{
    application::ExampleFactory,
    config::GameConfig,
    engine::Engine,
    logger::Logger,
    platform::{Platform, platform_winit::WinitPlatform},
};

fn main() -> Result<()> {
    let config = GameConfig::default();
    let _logger = Logger::new(config.log_level)?;

    let mut factory = ExampleFactory::with_config(config);
    let mut engine = Engine::new();
    if !engine.start(&mut factory) {
        bail!("game factory setup failed");
    }

    let mut platform = WinitPlatform::new(engine);
    platform.run()?;
    info!("HELLO FACTORY!");
    Ok(())
}
