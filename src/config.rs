/// Per-frame increments applied while a key is held.
///
/// The steps are not scaled by elapsed time, so the apparent speed follows the frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// translation per frame for every arrow key
    pub translation_step: f32,
    /// wheel rotation per frame in degrees, for left/right
    pub rotation_step_deg: f32,
    /// crank turns per wheel turn
    pub crank_ratio: f32,
    /// distance from the bottom bracket to the pedal spindle
    pub crank_radius: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            translation_step: 0.005,
            rotation_step_deg: 1.5,
            crank_ratio: 3.0,
            crank_radius: 0.07,
        }
    }
}

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g. `"bike_glow=debug,eframe=warn"`.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub multisampling: u16,
    pub background_rgb: [f32; 3],
    pub motion: MotionConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Bike".to_string(),
            inner_size: [1000.0, 1000.0],
            multisampling: 4,
            background_rgb: [1.0, 0.9, 0.2],
            motion: MotionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
