use imgui::Ui;

use crate::{
    panel::{cosmetic_button, layout::Region, pinned_window},
    session::Timeline,
    theme,
};

const TRANSPORT: [&str; 4] = ["|<", "<", ">", ">|"];
const TRACK_HEIGHT: f32 = 32.0;
const MIN_PLAYHEAD_WIDTH: f32 = 8.0;

pub fn draw(ui: &Ui, timeline: &Timeline, region: Region) {
    pinned_window(ui, "Timeline", region, theme::MENU_BACKGROUND, || {
        for label in TRANSPORT {
            cosmetic_button(ui, label);
            ui.same_line();
        }
        ui.text_disabled(format!(
            "Frame: {} / {}",
            timeline.current_frame, timeline.end_frame
        ));

        let origin = ui.cursor_screen_pos();
        let width = ui.content_region_avail()[0];
        let playhead = (width * timeline.progress()).max(MIN_PLAYHEAD_WIDTH);

        {
            let draw_list = ui.get_window_draw_list();
            draw_list
                .add_rect(
                    origin,
                    [origin[0] + width, origin[1] + TRACK_HEIGHT],
                    theme::TRACK_BACKGROUND,
                )
                .filled(true)
                .rounding(3.0)
                .build();
            draw_list
                .add_rect(
                    origin,
                    [origin[0] + playhead, origin[1] + TRACK_HEIGHT],
                    theme::PLAYHEAD,
                )
                .filled(true)
                .build();
        }

        ui.dummy([width, TRACK_HEIGHT]);
    });
}
