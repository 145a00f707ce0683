use imgui::Ui;

use crate::{
    panel::{layout::Region, pinned_window},
    scene_graph::{ObjectId, SceneStore},
    theme,
};

const VISIBILITY_COLUMN_WIDTH: f32 = 28.0;

enum RowAction {
    Select(ObjectId),
    ToggleVisible(ObjectId),
}

pub fn draw(ui: &Ui, scene: &mut SceneStore, region: Region) {
    pinned_window(ui, "Outliner", region, theme::PANEL_BACKGROUND, || {
        ui.text_disabled("Scene Collection");
        ui.separator();

        let mut action = None;

        for object in scene.objects() {
            let _id = ui.push_id(object.id.as_str());

            ui.text(object.kind().icon());
            ui.same_line();

            let name_width = ui.content_region_avail()[0] - VISIBILITY_COLUMN_WIDTH;
            if ui
                .selectable_config(&object.name)
                .selected(scene.is_selected(&object.id))
                .size([name_width, 0.0])
                .build()
            {
                action = Some(RowAction::Select(object.id.clone()));
            }

            ui.same_line();
            let mut visible = object.visible;
            if ui.checkbox("##visible", &mut visible) {
                action = Some(RowAction::ToggleVisible(object.id.clone()));
            }
            if ui.is_item_hovered() {
                ui.tooltip_text(if object.visible { "Hide" } else { "Show" });
            }
        }

        // Applied after the loop, which borrows the object list.
        match action {
            Some(RowAction::Select(id)) => scene.select(id),
            Some(RowAction::ToggleVisible(id)) => scene.toggle_visible(&id),
            None => {}
        }
    });
}
