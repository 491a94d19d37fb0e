use std::path::PathBuf;

use clap::{ArgAction, Parser};

mod backend;
mod config;
mod dialog;
mod display;
mod draw;
mod export;
mod input;
mod page;
mod util;

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, about = "Multi-page raster whiteboard")]
struct Cli {
    /// Image file to load onto the first page
    #[arg(long, short = 'o', value_name = "FILE")]
    open: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long, action = ArgAction::SetTrue)]
    show_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = config::Config::load()?;

    if cli.show_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    log::info!("Controls:");
    log::info!("  - Pen: drag to draw (P reselects it)");
    log::info!("  - Eraser: E, Text: T then click to place");
    log::info!(
        "  - Shapes: R (rectangle), C (circle), L (line), B (box/cube), 3 (triangle), 5 (pentagon), 6 (hexagon), 8 (star)"
    );
    log::info!("  - Color: F2, stroke width: F3, font size: F4, font style: F5");
    log::info!("  - Clear page: X");
    log::info!("  - Pages: Left/Right arrows or PageUp/PageDown");
    log::info!("  - Save PDF: S, export page PNG: G, open image: I");
    log::info!("  - Exit: Q or Escape");
    log::info!("");

    backend::run(&config, cli.open.as_deref())
}
