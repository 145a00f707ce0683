use glam::Vec2;
use imgui::{Condition, StyleColor, Ui, WindowFlags};

use crate::session::SessionState;

pub mod layout;
mod menu_bar;
mod outliner;
mod properties;
pub mod sketch;
mod timeline;
mod toolbar;
mod viewport;

use layout::{PanelLayout, Region};

const PANEL_FLAGS: WindowFlags = WindowFlags::NO_TITLE_BAR
    .union(WindowFlags::NO_RESIZE)
    .union(WindowFlags::NO_MOVE)
    .union(WindowFlags::NO_COLLAPSE)
    .union(WindowFlags::NO_SAVED_SETTINGS)
    .union(WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS);

/// Draws the whole panel for one frame.
pub fn draw(ui: &Ui, session: &mut SessionState) {
    let menu_bar_height = menu_bar::draw(ui, session);

    let display_size = Vec2::from(ui.io().display_size);
    let layout = PanelLayout::compute(display_size, menu_bar_height, &session.config);

    toolbar::draw(ui, session, layout.toolbar);
    outliner::draw(ui, &mut session.scene, layout.outliner);
    viewport::draw(ui, session, layout.viewport);
    properties::draw(ui, &session.scene, layout.properties);
    timeline::draw(ui, &session.timeline, layout.timeline);
}

/// An undecorated window pinned to `region`.
fn pinned_window(ui: &Ui, name: &str, region: Region, background: [f32; 4], contents: impl FnOnce()) {
    let _background = ui.push_style_color(StyleColor::WindowBg, background);

    ui.window(name)
        .position(region.position.to_array(), Condition::Always)
        .size(region.size.to_array(), Condition::Always)
        .flags(PANEL_FLAGS)
        .build(contents);
}

/// A button that is present for looks only.
fn cosmetic_button(ui: &Ui, label: &str) {
    if ui.button(label) {
        log::debug!("'{}' has no action", label);
    }
}
