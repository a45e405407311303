use tracing::Level;

/// Display surface settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    pub width: u32,
    pub height: u32,
    /// Bits per pixel.
    pub depth: u32,
    pub title: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        FrameConfig {
            width: 800,
            height: 600,
            depth: 32,
            title: "Hello Factory".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub frame: FrameConfig,
    /// How often the statistics module reports, in milliseconds.
    pub statistics_interval_ms: u64,
    pub log_level: Level,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            frame: FrameConfig::default(),
            statistics_interval_ms: 1000,
            log_level: Level::DEBUG,
        }
    }
}
