//! Heatgrid: shows RNG output matrices (`out*.tsv`) as a grid of heatmaps.

pub mod app;
pub mod cli;
pub mod color;
pub mod constants;
pub mod data;
pub mod export;
pub mod layout;
pub mod report;
pub mod state;
pub mod ui;
