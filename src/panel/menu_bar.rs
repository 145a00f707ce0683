use imgui::Ui;

use crate::session::SessionState;

const MENUS: [(&str, &[&str]); 5] = [
    ("File", &["New", "Open...", "Save", "Save As..."]),
    ("Edit", &["Undo", "Redo", "Preferences..."]),
    ("Render", &["Render Image", "Render Animation"]),
    ("Window", &["New Window", "Toggle Fullscreen"]),
    ("Help", &["Manual", "About"]),
];

/// Draws the main menu bar and returns its height.
pub fn draw(ui: &Ui, session: &mut SessionState) -> f32 {
    let mut height = 0.0;

    ui.main_menu_bar(|| {
        for (menu, items) in MENUS {
            ui.menu(menu, || {
                for item in items {
                    if ui.menu_item(item) {
                        log::debug!("Menu item '{} > {}' has no action", menu, item);
                    }
                }

                if menu == "File" {
                    ui.separator();
                    if ui.menu_item_config("Quit").shortcut("Ctrl+Q").build() {
                        session.request_close();
                    }
                }
            });
        }

        height = ui.window_size()[1];
    });

    height
}
