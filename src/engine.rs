use imgui::Key;

use crate::{panel, session::SessionState};

pub fn update(session: &mut SessionState, ui: &imgui::Ui) {
    if ui.io().key_ctrl && ui.is_key_pressed(Key::Q) {
        session.request_close();
    }

    panel::draw(ui, session);

    if session.take_scene_change() {
        let hidden = session.scene.objects().iter().filter(|o| !o.visible).count();
        log::debug!("Scene changed ({} hidden objects)", hidden);
    }
}
