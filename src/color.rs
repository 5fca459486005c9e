use eframe::egui::{Color32, ColorImage};
use palette::{LinSrgb, Mix, Srgb};

use crate::data::model::HeatmapPanel;

// ---------------------------------------------------------------------------
// Viridis colour scale
// ---------------------------------------------------------------------------

/// Viridis anchor colours (sRGB), evenly spaced from low to high.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

/// Maps a value range onto the viridis scale.
#[derive(Debug, Clone)]
pub struct ColorScale {
    min: f64,
    max: f64,
    anchors: Vec<LinSrgb>,
}

impl ColorScale {
    /// Scale auto-ranged to `[min, max]`.
    pub fn new(min: u32, max: u32) -> Self {
        let anchors = VIRIDIS
            .iter()
            .map(|&(r, g, b)| Srgb::new(r, g, b).into_format::<f32>().into_linear())
            .collect();
        ColorScale {
            min: min as f64,
            max: max as f64,
            anchors,
        }
    }

    pub fn for_panel(panel: &HeatmapPanel) -> Self {
        Self::new(panel.min, panel.max)
    }

    /// Position of `value` in the range, clamped to [0, 1]. A degenerate
    /// range maps everything to 0.
    pub fn normalize(&self, value: u32) -> f32 {
        let range = self.max - self.min;
        if range <= 0.0 {
            return 0.0;
        }
        (((value as f64) - self.min) / range).clamp(0.0, 1.0) as f32
    }

    /// sRGB bytes for `value`.
    pub fn rgb(&self, value: u32) -> [u8; 3] {
        let t = self.normalize(value) * (self.anchors.len() - 1) as f32;
        let lo = (t.floor() as usize).min(self.anchors.len() - 2);
        let mixed = self.anchors[lo].mix(self.anchors[lo + 1], t - lo as f32);
        let out: Srgb<u8> = Srgb::<f32>::from_linear(mixed).into_format();
        [out.red, out.green, out.blue]
    }

    pub fn color32(&self, value: u32) -> Color32 {
        let [r, g, b] = self.rgb(value);
        Color32::from_rgb(r, g, b)
    }
}

/// Nearest-neighbour resample of a panel to `width` x `height` sRGB pixels,
/// row 0 of the matrix at the top.
pub fn sample_rgb(panel: &HeatmapPanel, width: usize, height: usize) -> Vec<u8> {
    let scale = ColorScale::for_panel(panel);
    let m = &panel.matrix;
    let mut rgb = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        let row = y * m.rows() / height;
        for x in 0..width {
            let col = x * m.cols() / width;
            let v = m.get(row, col).unwrap_or(panel.min);
            rgb.extend_from_slice(&scale.rgb(v));
        }
    }
    rgb
}

/// Texture for a panel: one pixel per matrix cell, each side capped at
/// `max_side` pixels.
pub fn panel_image(panel: &HeatmapPanel, max_side: usize) -> ColorImage {
    let width = panel.matrix.cols().min(max_side);
    let height = panel.matrix.rows().min(max_side);
    ColorImage::from_rgb([width, height], &sample_rgb(panel, width, height))
}
