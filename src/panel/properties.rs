use glam::Vec3;
use imgui::{TreeNodeFlags, Ui};

use crate::{
    panel::{cosmetic_button, layout::Region, pinned_window},
    scene_graph::{ObjectKind, SceneStore},
    theme,
};

const TABS: [&str; 5] = ["Scene", "World", "Object", "Tools", "Material"];

pub fn draw(ui: &Ui, scene: &SceneStore, region: Region) {
    pinned_window(ui, "Properties", region, theme::PANEL_BACKGROUND, || {
        for (i, tab) in TABS.iter().enumerate() {
            if i > 0 {
                ui.same_line();
            }
            cosmetic_button(ui, tab);
        }
        ui.separator();

        let Some(object) = scene.selected_object() else {
            return;
        };

        ui.text(format!("{} ({})", object.name, object.kind().label()));

        if ui.collapsing_header("Transform", TreeNodeFlags::DEFAULT_OPEN) {
            transform_row(ui, "Location", object.transform.position);
            transform_row(ui, "Rotation", object.transform.rotation);
            transform_row(ui, "Scale", object.transform.scale);
        }

        if object.kind() == ObjectKind::Cube
            && ui.collapsing_header("Modifiers", TreeNodeFlags::DEFAULT_OPEN)
        {
            if ui.button_with_size("+ Add Modifier", [ui.content_region_avail()[0], 0.0]) {
                log::debug!("'Add Modifier' has no action");
            }
        }
    });
}

/// Edits go to a scratch copy and are dropped at the end of the frame.
fn transform_row(ui: &Ui, label: &str, value: Vec3) {
    let mut scratch = value.to_array();
    if ui.input_float3(label, &mut scratch).build() {
        log::trace!("{} edit discarded: {:?}", label, scratch);
    }
}
