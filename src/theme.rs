use imgui::{ImColor32, StyleColor};

pub const APP_BACKGROUND: [f32; 4] = [0.188, 0.188, 0.188, 1.0];
pub const MENU_BACKGROUND: [f32; 4] = [0.145, 0.145, 0.145, 1.0];
pub const HEADER_BACKGROUND: [f32; 4] = [0.239, 0.239, 0.239, 1.0];
pub const PANEL_BACKGROUND: [f32; 4] = [0.157, 0.157, 0.157, 1.0];
pub const FIELD_BACKGROUND: [f32; 4] = [0.314, 0.314, 0.314, 1.0];
pub const FIELD_HOVERED: [f32; 4] = [0.376, 0.376, 0.376, 1.0];
pub const SELECTION: [f32; 4] = [0.145, 0.388, 0.922, 0.4];
pub const ACCENT: [f32; 4] = [0.918, 0.345, 0.047, 1.0];
pub const ACCENT_HOVERED: [f32; 4] = [0.976, 0.451, 0.086, 1.0];
pub const MUTED_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 0.5];

pub const VIEWPORT_BACKGROUND: ImColor32 = ImColor32::from_rgb(0x3d, 0x3d, 0x3d);
pub const GRID_LINE: ImColor32 = ImColor32::from_rgb(0x4a, 0x4a, 0x4a);
pub const AXIS_X: ImColor32 = ImColor32::from_rgb(0xff, 0x44, 0x44);
pub const AXIS_Y: ImColor32 = ImColor32::from_rgb(0x44, 0xff, 0x44);
pub const AXIS_Z: ImColor32 = ImColor32::from_rgb(0x44, 0x44, 0xff);
pub const WIRE_SELECTED: ImColor32 = ImColor32::from_rgb(0xff, 0x99, 0x00);
pub const WIRE_DEFAULT: ImColor32 = ImColor32::from_rgb(0xff, 0xff, 0xff);
pub const OVERLAY_BACKGROUND: ImColor32 = ImColor32::from_rgba(0, 0, 0, 0x80);
pub const OVERLAY_TEXT: ImColor32 = ImColor32::from_rgb(0xff, 0xff, 0xff);
pub const PLAYHEAD: ImColor32 = ImColor32::from_rgb(0x3b, 0x82, 0xf6);
pub const TRACK_BACKGROUND: ImColor32 = ImColor32::from_rgb(0x3d, 0x3d, 0x3d);

/// Applies the dark palette to the ImGui style.
pub fn apply(style: &mut imgui::Style) {
    style.use_dark_colors();

    style.window_rounding = 0.0;
    style.window_border_size = 1.0;
    style.frame_rounding = 3.0;

    style[StyleColor::WindowBg] = PANEL_BACKGROUND;
    style[StyleColor::ChildBg] = HEADER_BACKGROUND;
    style[StyleColor::MenuBarBg] = MENU_BACKGROUND;
    style[StyleColor::PopupBg] = MENU_BACKGROUND;
    style[StyleColor::Border] = [0.0, 0.0, 0.0, 1.0];
    style[StyleColor::FrameBg] = FIELD_BACKGROUND;
    style[StyleColor::FrameBgHovered] = FIELD_HOVERED;
    style[StyleColor::Button] = FIELD_BACKGROUND;
    style[StyleColor::ButtonHovered] = FIELD_HOVERED;
    style[StyleColor::Header] = SELECTION;
    style[StyleColor::HeaderHovered] = [1.0, 1.0, 1.0, 0.1];
    style[StyleColor::TextDisabled] = MUTED_TEXT;
}
