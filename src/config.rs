use crate::mode::InteractionMode;

/// Environment variable that picks the mode the toolbar starts in.
pub const MODE_ENV_VAR: &str = "SCENE_PANEL_MODE";

#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub window_title: String,
    pub window_size: [f64; 2],
    pub font_size: f32,

    pub toolbar_height: f32,
    pub outliner_width: f32,
    pub properties_width: f32,
    pub timeline_height: f32,

    pub grid_spacing: f32,
    pub initial_mode: InteractionMode,
}

impl PanelConfig {
    /// Defaults, with the initial mode optionally overridden from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(MODE_ENV_VAR) {
            config.initial_mode = parse_mode_or_default(&value);
        }
        config
    }
}

fn parse_mode_or_default(value: &str) -> InteractionMode {
    match value.parse() {
        Ok(mode) => mode,
        Err(err) => {
            log::warn!("Ignoring {}: {}", MODE_ENV_VAR, err);
            InteractionMode::default()
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            window_title: "Scene Panel".to_string(),
            window_size: [1280.0, 800.0],
            font_size: 14.0,
            toolbar_height: 32.0,
            outliner_width: 208.0,
            properties_width: 288.0,
            timeline_height: 96.0,
            grid_spacing: 40.0,
            initial_mode: InteractionMode::Object,
        }
    }
}
