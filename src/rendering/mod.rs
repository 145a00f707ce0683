pub mod config;
pub mod imgui_renderer;
pub mod renderer;
