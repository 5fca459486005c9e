use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use super::discover::discover;
use super::label::FileLabel;
use super::matrix::{load_matrix, Matrix};

// ---------------------------------------------------------------------------
// HeatmapPanel – one file, ready to draw
// ---------------------------------------------------------------------------

/// A loaded output file: its label, its matrix and the colour-scale range.
#[derive(Debug, Clone)]
pub struct HeatmapPanel {
    pub path: PathBuf,
    pub label: FileLabel,
    /// Shared with the viewer's hover read-out.
    pub matrix: Arc<Matrix>,
    /// Smallest value, mapped to the low end of the colour scale.
    pub min: u32,
    /// Largest value, mapped to the high end of the colour scale.
    pub max: u32,
}

impl HeatmapPanel {
    /// Label and load a single file.
    pub fn load(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("{} has no usable file name", path.display()))?;
        let label = FileLabel::parse(file_name)?;
        let matrix = load_matrix(path).with_context(|| format!("loading {file_name}"))?;
        let (min, max) = matrix.min_max();

        log::info!(
            "Loaded {file_name}: {}x{} values in [{min}, {max}]",
            matrix.rows(),
            matrix.cols()
        );

        Ok(HeatmapPanel {
            path: path.to_path_buf(),
            label,
            matrix: Arc::new(matrix),
            min,
            max,
        })
    }

    pub fn title(&self) -> String {
        self.label.title()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Discover and load every matching file in `dir`, in grid order.
///
/// Stops at the first file that fails to label or load.
pub fn load_panels(dir: &Path, pattern: &str) -> Result<Vec<HeatmapPanel>> {
    log::info!("Scanning {} for '{pattern}'", dir.display());
    let files = discover(dir, pattern)?;
    if files.is_empty() {
        log::warn!("No files matching '{pattern}' in {}", dir.display());
    }

    files.iter().map(|path| HeatmapPanel::load(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn loads_three_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "out_c_30.z.tsv", "5\t6\t\n");
        write(dir.path(), "out_a_10.x.tsv", "1 2 3\n4 5 6\n");
        write(dir.path(), "out_b_20.y.tsv", "9\n");

        let panels = load_panels(dir.path(), "out*.tsv").unwrap();
        let titles: Vec<String> = panels.iter().map(HeatmapPanel::title).collect();
        assert_eq!(titles, ["a, 10 seeds (x)", "b, 20 seeds (y)", "c, 30 seeds (z)"]);

        assert_eq!((panels[0].matrix.rows(), panels[0].matrix.cols()), (2, 3));
        assert_eq!((panels[0].min, panels[0].max), (1, 6));
        assert_eq!(panels[2].file_name(), "out_c_30.z.tsv");
    }

    #[test]
    fn empty_set_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "other.tsv", "1\n");
        assert!(load_panels(dir.path(), "out*.tsv").unwrap().is_empty());
    }

    #[test]
    fn bad_name_aborts_the_load() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "out_a_1.x.tsv", "1\n");
        write(dir.path(), "out.tsv", "1\n");

        let err = load_panels(dir.path(), "out*.tsv").unwrap_err();
        assert!(format!("{err:#}").contains("out.tsv"));
    }

    #[test]
    fn bad_content_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "out_a_1.x.tsv", "1 2\n3\n");

        let err = load_panels(dir.path(), "out*.tsv").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("loading out_a_1.x.tsv"), "{msg}");
        assert!(msg.contains("expected 2 values, found 1"), "{msg}");
    }
}
