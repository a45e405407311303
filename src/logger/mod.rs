use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub struct Logger;

impl Logger {
    /// Installs the global subscriber. Fails if one is already set.
    pub fn new(level: Level) -> Result<Self> {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .pretty()
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .context("setting default subscriber failed")?;

        Ok(Self)
    }
}
