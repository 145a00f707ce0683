use anyhow::Result;

mod config;
mod engine;
mod mode;
mod panel;
mod rendering;
mod scene_graph;
mod session;
mod theme;
mod window;

fn main() -> Result<()> {
    pretty_env_logger::init();

    pollster::block_on(window::run())?;

    Ok(())
}
