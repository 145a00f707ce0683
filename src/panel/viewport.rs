use glam::Vec2;
use imgui::{DrawListMut, StyleVar, Ui};

use crate::{
    panel::{
        cosmetic_button,
        layout::Region,
        pinned_window,
        sketch::{Stroke, ViewportSketch},
    },
    session::SessionState,
    theme,
};

const OVERLAY_MARGIN: f32 = 8.0;
const OVERLAY_PADDING: Vec2 = Vec2::new(8.0, 4.0);
const NAVIGATION: [&str; 3] = ["Orbit", "Pan", "Zoom"];

pub fn draw(ui: &Ui, session: &mut SessionState, region: Region) {
    let _padding = ui.push_style_var(StyleVar::WindowPadding([0.0, 0.0]));

    pinned_window(ui, "Viewport", region, theme::PANEL_BACKGROUND, || {
        let origin = Vec2::from(ui.cursor_screen_pos());
        let size = Vec2::from(ui.content_region_avail());
        let overlay = format!("View: Perspective | {}", session.mode.label());

        {
            let draw_list = ui.get_window_draw_list();
            replay(&draw_list, origin, session.viewport_sketch(size));

            let text_size = Vec2::from(ui.calc_text_size(&overlay));
            let min = origin + Vec2::splat(OVERLAY_MARGIN);
            let max = min + text_size + OVERLAY_PADDING * 2.0;
            draw_list
                .add_rect(min.to_array(), max.to_array(), theme::OVERLAY_BACKGROUND)
                .filled(true)
                .rounding(3.0)
                .build();
            draw_list.add_text(
                (min + OVERLAY_PADDING).to_array(),
                theme::OVERLAY_TEXT,
                &overlay,
            );
        }

        ui.set_cursor_pos([
            OVERLAY_MARGIN,
            (size.y - OVERLAY_MARGIN - ui.frame_height()).max(0.0),
        ]);
        for (i, label) in NAVIGATION.iter().enumerate() {
            if i > 0 {
                ui.same_line();
            }
            cosmetic_button(ui, label);
        }
    });
}

fn replay<'ui>(draw_list: &'ui DrawListMut<'ui>, origin: Vec2, sketch: &ViewportSketch) {
    let at = |point: Vec2| (origin + point).to_array();

    for stroke in sketch.strokes() {
        match *stroke {
            Stroke::Fill { min, max, color } => {
                draw_list
                    .add_rect(at(min), at(max), color)
                    .filled(true)
                    .build();
            }
            Stroke::Line {
                from,
                to,
                color,
                thickness,
            } => {
                draw_list
                    .add_line(at(from), at(to), color)
                    .thickness(thickness)
                    .build();
            }
            Stroke::Outline {
                min,
                max,
                color,
                thickness,
            } => {
                draw_list
                    .add_rect(at(min), at(max), color)
                    .thickness(thickness)
                    .build();
            }
        }
    }
}
