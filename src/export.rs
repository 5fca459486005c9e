use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

use crate::color::sample_rgb;
use crate::constants::export::{CELL_SIZE, GAP};
use crate::data::model::HeatmapPanel;
use crate::layout::GridLayout;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

// ---------------------------------------------------------------------------
// Grid → PNG
// ---------------------------------------------------------------------------

/// Compose the grid into one image. Every heatmap is stretched into a
/// `CELL_SIZE` square; empty cells stay background.
pub fn render_grid(panels: &[HeatmapPanel], grid: &GridLayout) -> RgbImage {
    let stride = CELL_SIZE + GAP;
    let width = GAP + grid.columns as u32 * stride;
    let height = GAP + grid.rows as u32 * stride;
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

    let side = CELL_SIZE as usize;
    for (index, panel) in panels.iter().enumerate() {
        let (row, col) = grid.cell(index);
        let x0 = GAP + col as u32 * stride;
        let y0 = GAP + row as u32 * stride;

        let pixels = sample_rgb(panel, side, side);
        for (i, px) in pixels.chunks_exact(3).enumerate() {
            let x = x0 + (i % side) as u32;
            let y = y0 + (i / side) as u32;
            canvas.put_pixel(x, y, Rgb([px[0], px[1], px[2]]));
        }
    }
    canvas
}

/// Render the grid and write it as PNG.
pub fn save_png(panels: &[HeatmapPanel], grid: &GridLayout, path: &Path) -> Result<()> {
    let canvas = render_grid(panels, grid);
    canvas
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!(
        "Saved {}x{} grid ({} heatmaps) to {}",
        grid.rows,
        grid.columns,
        panels.len(),
        path.display()
    );
    Ok(())
}
