use glam::Vec2;

use crate::config::PanelConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub position: Vec2,
    pub size: Vec2,
}

impl Region {
    fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size: size.max(Vec2::ZERO),
        }
    }
}

/// Screen regions of the fixed panel arrangement below the main menu bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub toolbar: Region,
    pub outliner: Region,
    pub viewport: Region,
    pub properties: Region,
    pub timeline: Region,
}

impl PanelLayout {
    pub fn compute(display_size: Vec2, menu_bar_height: f32, config: &PanelConfig) -> Self {
        let width = display_size.x;
        let toolbar_top = menu_bar_height;
        let body_top = toolbar_top + config.toolbar_height;
        let timeline_top = (display_size.y - config.timeline_height).max(body_top);
        let body_height = timeline_top - body_top;

        let properties_left = (width - config.properties_width).max(config.outliner_width);

        Self {
            toolbar: Region::new(
                Vec2::new(0.0, toolbar_top),
                Vec2::new(width, config.toolbar_height),
            ),
            outliner: Region::new(
                Vec2::new(0.0, body_top),
                Vec2::new(config.outliner_width, body_height),
            ),
            viewport: Region::new(
                Vec2::new(config.outliner_width, body_top),
                Vec2::new(properties_left - config.outliner_width, body_height),
            ),
            properties: Region::new(
                Vec2::new(properties_left, body_top),
                Vec2::new(width - properties_left, body_height),
            ),
            timeline: Region::new(
                Vec2::new(0.0, timeline_top),
                Vec2::new(width, display_size.y - timeline_top),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_display() {
        let config = PanelConfig::default();
        let layout = PanelLayout::compute(Vec2::new(1280.0, 800.0), 20.0, &config);

        assert_eq!(layout.toolbar.position, Vec2::new(0.0, 20.0));
        assert_eq!(layout.outliner.position, Vec2::new(0.0, 52.0));
        assert_eq!(layout.outliner.size, Vec2::new(208.0, 652.0));
        assert_eq!(layout.viewport.position, Vec2::new(208.0, 52.0));
        assert_eq!(layout.viewport.size, Vec2::new(784.0, 652.0));
        assert_eq!(layout.properties.position, Vec2::new(992.0, 52.0));
        assert_eq!(layout.properties.size.x, 288.0);
        assert_eq!(layout.timeline.position, Vec2::new(0.0, 704.0));
        assert_eq!(layout.timeline.size, Vec2::new(1280.0, 96.0));
    }

    #[test]
    fn tiny_display_never_yields_negative_sizes() {
        let config = PanelConfig::default();
        let layout = PanelLayout::compute(Vec2::new(100.0, 50.0), 20.0, &config);

        for region in [
            layout.toolbar,
            layout.outliner,
            layout.viewport,
            layout.properties,
            layout.timeline,
        ] {
            assert!(region.size.x >= 0.0 && region.size.y >= 0.0, "{:?}", region);
        }
        assert_eq!(layout.viewport.size, Vec2::ZERO);
    }
}
