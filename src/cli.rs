use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::Parser;

use crate::constants::{DEFAULT_COLUMNS, DEFAULT_PATTERN};
use crate::layout::RowRule;

#[derive(Parser, Debug)]
#[command(
    name = "heatgrid",
    version,
    about = "Show RNG output matrices (out*.tsv) as a grid of heatmaps"
)]
pub struct Cli {
    /// Directory to scan for matrix files
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// File name pattern (`*` and `?` wildcards)
    #[arg(long, short, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Heatmaps per grid row
    #[arg(long, short, default_value_t = DEFAULT_COLUMNS,
          value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize))]
    pub columns: usize,

    /// Size the grid with ceil(files / columns) rows instead of files / columns + 1
    #[arg(long)]
    pub tight: bool,

    /// Print what would be plotted as JSON lines and exit
    #[arg(long, conflicts_with = "save")]
    pub list: bool,

    /// Write the grid to a PNG file and exit
    #[arg(long, value_name = "PNG")]
    pub save: Option<PathBuf>,
}

impl Cli {
    pub fn row_rule(&self) -> RowRule {
        if self.tight {
            RowRule::Tight
        } else {
            RowRule::ExtraRow
        }
    }
}
