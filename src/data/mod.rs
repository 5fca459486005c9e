/// Data layer: file discovery, filename labels, matrix loading.
///
/// Architecture:
/// ```text
///   directory + glob
///        │
///        ▼
///   ┌──────────┐
///   │ discover  │  list matching file names (sorted)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  label    │  out_<name>_<count>.<qualifier>.tsv → FileLabel
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  matrix   │  whitespace-separated u32 rows → Matrix
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  HeatmapPanel per file, in grid order
///   └──────────┘
/// ```

pub mod discover;
pub mod label;
pub mod matrix;
pub mod model;
