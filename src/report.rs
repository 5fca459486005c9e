use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::data::label::FileLabel;
use crate::data::model::HeatmapPanel;
use crate::layout::GridLayout;

// ---------------------------------------------------------------------------
// JSON listing (`--list`)
// ---------------------------------------------------------------------------

/// One line of the listing: where a heatmap goes and what it shows.
#[derive(Debug, Serialize)]
pub struct PanelSummary<'a> {
    pub file: String,
    pub title: String,
    pub label: &'a FileLabel,
    /// One-based subplot position.
    pub position: usize,
    pub rows: usize,
    pub cols: usize,
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Serialize)]
struct GridSummary<'a> {
    grid: &'a GridLayout,
}

pub fn summarize<'a>(panels: &'a [HeatmapPanel], grid: &GridLayout) -> Vec<PanelSummary<'a>> {
    panels
        .iter()
        .enumerate()
        .map(|(i, p)| PanelSummary {
            file: p.file_name(),
            title: p.title(),
            label: &p.label,
            position: grid.position(i),
            rows: p.matrix.rows(),
            cols: p.matrix.cols(),
            min: p.min,
            max: p.max,
        })
        .collect()
}

/// Write one JSON object per panel, then the grid shape.
pub fn write_listing<W: Write>(out: &mut W, panels: &[HeatmapPanel], grid: &GridLayout) -> Result<()> {
    for summary in summarize(panels, grid) {
        serde_json::to_writer(&mut *out, &summary)?;
        writeln!(out)?;
    }
    serde_json::to_writer(&mut *out, &GridSummary { grid })?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::load_panels;
    use crate::layout::RowRule;
    use serde_json::Value as JsonValue;

    #[test]
    fn lists_panels_then_grid() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("out_a_10.x.tsv"), "1 2 3\n4 5 6\n").unwrap();
        std::fs::write(dir.path().join("out_b_20.y.tsv"), "7\n").unwrap();
        let panels = load_panels(dir.path(), "out*.tsv").unwrap();
        let grid = GridLayout::new(panels.len(), 3, RowRule::ExtraRow);

        let mut buf = Vec::new();
        write_listing(&mut buf, &panels, &grid).unwrap();
        let lines: Vec<JsonValue> = String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["title"], "a, 10 seeds (x)");
        assert_eq!(lines[0]["label"]["count"], "10");
        assert_eq!(lines[0]["position"], 1);
        assert_eq!(lines[0]["rows"], 2);
        assert_eq!(lines[0]["cols"], 3);
        assert_eq!(lines[0]["max"], 6);
        assert_eq!(lines[1]["file"], "out_b_20.y.tsv");
        assert_eq!(lines[1]["position"], 2);
        assert_eq!(lines[2]["grid"]["rows"], 1);
        assert_eq!(lines[2]["grid"]["columns"], 3);
        assert_eq!(lines[2]["grid"]["count"], 2);
    }

    #[test]
    fn empty_listing_still_reports_grid() {
        let grid = GridLayout::new(0, 3, RowRule::ExtraRow);
        let mut buf = Vec::new();
        write_listing(&mut buf, &[], &grid).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"grid\":{\"count\":0,\"columns\":3,\"rows\":1}}\n"
        );
    }
}
