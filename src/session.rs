use std::sync::Arc;

use anyhow::Context;
use glam::Vec2;

use crate::{
    config::PanelConfig,
    mode::InteractionMode,
    panel::sketch::ViewportSketch,
    scene_graph::{ObjectId, SceneObject, SceneStore},
};

const CUBE_ID: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub current_frame: u32,
    pub end_frame: u32,
}

impl Timeline {
    pub fn progress(&self) -> f32 {
        if self.end_frame == 0 {
            return 0.0;
        }
        (self.current_frame as f32 / self.end_frame as f32).clamp(0.0, 1.0)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            current_frame: 1,
            end_frame: 250,
        }
    }
}

/// Everything one interactive session owns.
pub struct SessionState {
    pub config: PanelConfig,
    pub scene: SceneStore,
    pub mode: InteractionMode,
    pub timeline: Timeline,
    sketch: Option<ViewportSketch>,
    observed_objects: Arc<Vec<SceneObject>>,
    close_requested: bool,
}

impl SessionState {
    pub fn new(config: PanelConfig) -> anyhow::Result<Self> {
        let scene = SceneStore::seeded().context("Failed to seed scene")?;
        let mode = config.initial_mode;
        let observed_objects = scene.objects_handle();

        Ok(Self {
            config,
            scene,
            mode,
            timeline: Timeline::default(),
            sketch: None,
            observed_objects,
            close_requested: false,
        })
    }

    pub fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode != mode {
            log::debug!("Switched to {}", mode.label());
            self.mode = mode;
        }
    }

    /// Host-side "close" notification. Nothing needs to be released.
    pub fn request_close(&mut self) {
        log::info!("Close requested");
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// True once per replacement of the object list since the last call.
    pub fn take_scene_change(&mut self) -> bool {
        if !self.scene.has_changed_since(&self.observed_objects) {
            return false;
        }

        self.observed_objects = self.scene.objects_handle();
        true
    }

    fn cube_highlighted(&self) -> bool {
        self.scene.is_selected(&ObjectId::from(CUBE_ID))
    }

    /// Rebuilds the viewport sketch if the selection or size changed since
    /// the last frame, and returns it.
    pub fn viewport_sketch(&mut self, size: Vec2) -> &ViewportSketch {
        let highlighted = self.cube_highlighted();
        let grid_spacing = self.config.grid_spacing;

        match &self.sketch {
            Some(sketch) if sketch.is_current(size, highlighted) => {}
            _ => {
                log::debug!(
                    "Redrawing viewport sketch at {}x{} (cube highlighted: {})",
                    size.x,
                    size.y,
                    highlighted
                );
                self.sketch = Some(ViewportSketch::build(size, highlighted, grid_spacing));
            }
        }

        self.sketch
            .get_or_insert_with(|| ViewportSketch::build(size, highlighted, grid_spacing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionState {
        SessionState::new(PanelConfig::default()).unwrap()
    }

    #[test]
    fn starts_open_in_configured_mode() {
        let config = PanelConfig {
            initial_mode: InteractionMode::Edit,
            ..PanelConfig::default()
        };
        let session = SessionState::new(config).unwrap();

        assert_eq!(session.mode, InteractionMode::Edit);
        assert!(!session.close_requested());
        assert_eq!(session.scene.objects().len(), 3);
    }

    #[test]
    fn close_only_sets_the_flag() {
        let mut session = session();
        let handle = session.scene.objects_handle();

        session.request_close();

        assert!(session.close_requested());
        assert!(!session.scene.has_changed_since(&handle));
        assert_eq!(session.scene.selected_id(), Some(&ObjectId::from("1")));
    }

    #[test]
    fn sketch_is_rebuilt_on_selection_change() {
        let mut session = session();
        let size = Vec2::new(640.0, 480.0);

        let first = session.viewport_sketch(size).clone();
        assert!(first.is_current(size, true));

        let again = session.viewport_sketch(size).clone();
        assert_eq!(first, again);

        session.scene.select(ObjectId::from("2"));
        let after = session.viewport_sketch(size).clone();
        assert!(after.is_current(size, false));
        assert_ne!(first, after);
    }

    #[test]
    fn visibility_does_not_affect_sketch() {
        let mut session = session();
        let size = Vec2::new(320.0, 240.0);
        let before = session.viewport_sketch(size).clone();

        session.scene.toggle_visible(&ObjectId::from("1"));

        assert_eq!(session.viewport_sketch(size), &before);
    }

    #[test]
    fn scene_change_is_reported_once() {
        let mut session = session();
        assert!(!session.take_scene_change());

        session.scene.toggle_visible(&ObjectId::from("2"));
        assert!(session.take_scene_change());
        assert!(!session.take_scene_change());

        session.scene.select(ObjectId::from("3"));
        session.scene.toggle_visible(&ObjectId::from("404"));
        assert!(!session.take_scene_change());
    }

    #[test]
    fn mode_switch_leaves_scene_untouched() {
        let mut session = session();
        let handle = session.scene.objects_handle();

        session.set_mode(InteractionMode::Sculpt);

        assert_eq!(session.mode, InteractionMode::Sculpt);
        assert!(!session.scene.has_changed_since(&handle));
    }

    #[test]
    fn timeline_progress() {
        let timeline = Timeline::default();
        assert_eq!(timeline.progress(), 1.0 / 250.0);
        assert_eq!(
            Timeline {
                current_frame: 5,
                end_frame: 0
            }
            .progress(),
            0.0
        );
    }
}
