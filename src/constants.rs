//! Default values shared by the CLI, the viewer and the PNG export.

/// File name pattern the RNG test program's `file-tsv` output matches.
pub const DEFAULT_PATTERN: &str = "out*.tsv";

/// Subplots per grid row.
pub const DEFAULT_COLUMNS: usize = 3;

/// PNG export geometry, in pixels.
pub mod export {
    /// Edge length of the square each heatmap is scaled into.
    pub const CELL_SIZE: u32 = 256;

    /// Gap around and between cells.
    pub const GAP: u32 = 16;
}

/// Viewer window and cell geometry, in points.
pub mod viewer {
    pub const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

    /// Space between grid cells.
    pub const CELL_SPACING: f32 = 8.0;
}
