use imgui::{StyleColor, Ui};

use crate::{
    mode::InteractionMode,
    panel::{cosmetic_button, layout::Region, pinned_window},
    session::SessionState,
    theme,
};

const MODE_COMBO_WIDTH: f32 = 130.0;
const RENDER_BUTTON_WIDTH: f32 = 64.0;

pub fn draw(ui: &Ui, session: &mut SessionState, region: Region) {
    pinned_window(ui, "Toolbar", region, theme::HEADER_BACKGROUND, || {
        let labels = InteractionMode::ALL.map(InteractionMode::label);
        let mut index = session.mode.index();

        ui.set_next_item_width(MODE_COMBO_WIDTH);
        if ui.combo_simple_string("##mode", &mut index, &labels[..]) {
            match InteractionMode::from_index(index) {
                Some(mode) => session.set_mode(mode),
                None => log::warn!("Ignoring unknown mode index {}", index),
            }
        }

        ui.same_line();
        ui.text_disabled("|");
        ui.same_line();
        cosmetic_button(ui, "Add");
        ui.same_line();
        cosmetic_button(ui, "Delete");

        ui.same_line_with_pos(ui.window_size()[0] - RENDER_BUTTON_WIDTH - 8.0);
        let _button = ui.push_style_color(StyleColor::Button, theme::ACCENT);
        let _hovered = ui.push_style_color(StyleColor::ButtonHovered, theme::ACCENT_HOVERED);
        if ui.button_with_size("Render", [RENDER_BUTTON_WIDTH, 0.0]) {
            log::debug!("'Render' has no action");
        }
    });
}
