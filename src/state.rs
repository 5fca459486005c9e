use std::path::PathBuf;

use anyhow::Result;
use eframe::egui::{self, TextureHandle, TextureOptions};

use crate::color::panel_image;
use crate::data::model::{load_panels, HeatmapPanel};
use crate::layout::{GridLayout, RowRule};

// ---------------------------------------------------------------------------
// Load settings
// ---------------------------------------------------------------------------

/// Where and how to look for files, and how to lay them out.
#[derive(Debug, Clone)]
pub struct LoadSettings {
    pub dir: PathBuf,
    pub pattern: String,
    pub columns: usize,
    pub row_rule: RowRule,
}

impl LoadSettings {
    pub fn grid_for(&self, count: usize) -> GridLayout {
        GridLayout::new(count, self.columns, self.row_rule)
    }

    /// Discover and load every panel for these settings.
    pub fn load(&self) -> Result<Vec<HeatmapPanel>> {
        load_panels(&self.dir, &self.pattern)
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub settings: LoadSettings,

    /// Loaded panels in grid order.
    pub panels: Vec<HeatmapPanel>,

    /// Grid sized for `panels`.
    pub grid: GridLayout,

    /// GPU textures, uploaded on first paint; parallel to `panels`.
    textures: Vec<Option<TextureHandle>>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(settings: LoadSettings, panels: Vec<HeatmapPanel>) -> Self {
        let grid = settings.grid_for(panels.len());
        let textures = vec![None; panels.len()];
        Self {
            settings,
            panels,
            grid,
            textures,
            status_message: None,
        }
    }

    /// Replace the panel set, resizing the grid and dropping old textures.
    pub fn set_panels(&mut self, panels: Vec<HeatmapPanel>) {
        self.grid = self.settings.grid_for(panels.len());
        self.textures = vec![None; panels.len()];
        self.panels = panels;
        self.status_message = None;
    }

    /// Re-scan the current directory. On failure the previous panels stay
    /// and the error is shown in the top bar.
    pub fn reload(&mut self) {
        match self.settings.load() {
            Ok(panels) => {
                log::info!(
                    "Reloaded {} heatmaps from {}",
                    panels.len(),
                    self.settings.dir.display()
                );
                self.set_panels(panels);
            }
            Err(e) => {
                log::error!("Failed to reload: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Switch to another directory and load it.
    pub fn open_dir(&mut self, dir: PathBuf) {
        self.settings.dir = dir;
        self.reload();
    }

    /// Texture for panel `index`, uploading it if needed.
    pub fn texture(&mut self, ctx: &egui::Context, index: usize) -> Option<TextureHandle> {
        let panel = self.panels.get(index)?;
        let slot = self.textures.get_mut(index)?;
        let handle = slot.get_or_insert_with(|| {
            let max_side = ctx.input(|i| i.max_texture_side);
            let image = panel_image(panel, max_side);
            log::debug!(
                "Uploading texture for {} ({}x{})",
                panel.file_name(),
                image.size[0],
                image.size[1]
            );
            ctx.load_texture(panel.file_name(), image, TextureOptions::NEAREST)
        });
        Some(handle.clone())
    }
}
