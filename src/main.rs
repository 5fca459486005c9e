use std::process;

use anyhow::{anyhow, Result};
use clap::Parser;
use eframe::egui;

use heatgrid::app::HeatgridApp;
use heatgrid::cli::Cli;
use heatgrid::constants;
use heatgrid::state::{AppState, LoadSettings};
use heatgrid::{export, report};

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = LoadSettings {
        dir: cli.dir.clone(),
        pattern: cli.pattern.clone(),
        columns: cli.columns,
        row_rule: cli.row_rule(),
    };

    // Any bad file aborts before a window opens.
    let panels = settings.load()?;
    let grid = settings.grid_for(panels.len());
    log::info!(
        "{} heatmaps in a {}x{} grid",
        panels.len(),
        grid.rows,
        grid.columns
    );

    if cli.list {
        let stdout = std::io::stdout();
        return report::write_listing(&mut stdout.lock(), &panels, &grid);
    }
    if let Some(path) = &cli.save {
        return export::save_png(&panels, &grid, path);
    }

    show_window(AppState::new(settings, panels))
}

/// Open the viewer and block until it is closed.
fn show_window(state: AppState) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(constants::viewer::WINDOW_SIZE)
            .with_min_inner_size(constants::viewer::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Heatgrid – RNG output viewer",
        options,
        Box::new(|_cc| Ok(Box::new(HeatgridApp::new(state)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}
