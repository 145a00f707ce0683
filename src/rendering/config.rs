use crate::theme;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub clear_color: wgpu::Color,
    pub power_preference: wgpu::PowerPreference,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let [r, g, b, a] = theme::APP_BACKGROUND;

        Self {
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
            power_preference: wgpu::PowerPreference::LowPower,
        }
    }
}
