use std::sync::Arc;

use eframe::egui::{RichText, TextureHandle, Ui, Vec2};
use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::constants::viewer::CELL_SPACING;
use crate::data::matrix::Matrix;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Heatmap grid (central panel)
// ---------------------------------------------------------------------------

/// Render every panel into its grid cell. Trailing cells stay empty.
pub fn heatmap_grid(ui: &mut Ui, state: &mut AppState) {
    let ctx = ui.ctx().clone();
    let textures: Vec<Option<TextureHandle>> = (0..state.panels.len())
        .map(|i| state.texture(&ctx, i))
        .collect();

    let grid = state.grid;
    let avail = ui.available_size();
    let cell = Vec2::new(
        ((avail.x - CELL_SPACING * (grid.columns - 1) as f32) / grid.columns as f32).max(1.0),
        ((avail.y - CELL_SPACING * (grid.rows - 1) as f32) / grid.rows as f32).max(1.0),
    );

    ui.spacing_mut().item_spacing = Vec2::splat(CELL_SPACING);
    for row in 0..grid.rows {
        ui.horizontal(|ui: &mut Ui| {
            for col in 0..grid.columns {
                let index = row * grid.columns + col;
                match (state.panels.get(index), textures.get(index)) {
                    (Some(panel), Some(Some(texture))) => {
                        ui.allocate_ui(cell, |ui: &mut Ui| {
                            ui.vertical(|ui: &mut Ui| {
                                ui.set_min_size(cell);
                                let title = ui
                                    .label(RichText::new(panel.title()).strong())
                                    .on_hover_text(panel.path.display().to_string());
                                let height = plot_height(
                                    cell.y,
                                    title.rect.height(),
                                    ui.spacing().item_spacing.y,
                                );
                                heatmap_plot(ui, index, &panel.matrix, texture, cell.x, height);
                            });
                        });
                    }
                    _ => {
                        ui.allocate_space(cell);
                    }
                }
            }
        });
    }
}

/// One heatmap with matrix-index axes and a hover read-out.
fn heatmap_plot(
    ui: &mut Ui,
    index: usize,
    matrix: &Arc<Matrix>,
    texture: &TextureHandle,
    width: f32,
    height: f32,
) {
    let rows = matrix.rows() as f64;
    let cols = matrix.cols() as f64;

    let image = PlotImage::new(
        texture.id(),
        PlotPoint::new(cols / 2.0, rows / 2.0),
        Vec2::new(cols as f32, rows as f32),
    );

    Plot::new(format!("heatmap_{index}"))
        .width(width)
        .height(height)
        .show_grid(false)
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_zoom(true)
        .label_formatter({
            let matrix = Arc::clone(matrix);
            move |_name: &str, point: &PlotPoint| hover_text(&matrix, point)
        })
        .show(ui, |plot_ui| {
            plot_ui.image(image);
        });
}

/// Plot height left in a cell of `cell_height` once the title and the
/// spacing below it are laid out.
fn plot_height(cell_height: f32, title_height: f32, spacing: f32) -> f32 {
    (cell_height - title_height - spacing).max(1.0)
}

/// Row 0 is drawn at the top, so plot `y` counts up from the last row.
fn hover_text(matrix: &Matrix, point: &PlotPoint) -> String {
    let rows = matrix.rows() as f64;
    if point.x < 0.0 || point.y < 0.0 || point.y >= rows {
        return String::new();
    }
    let row = (rows - point.y).floor() as usize;
    let col = point.x.floor() as usize;
    match matrix.get(row, col) {
        Some(v) => format!("row {row}, col {col}\n{v}"),
        None => String::new(),
    }
}

/// Shown in place of the grid when nothing matched.
pub fn empty_hint(ui: &mut Ui, state: &AppState) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading(format!(
            "No files matching '{}' in {}  (File → Open folder…)",
            state.settings.pattern,
            state.settings.dir.display()
        ));
    });
}
