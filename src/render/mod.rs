//! Static map rendering: substitute a coordinate into the configured HTML
//! template and write the document to disk without partial-file states.

mod template;

pub use template::{MapTemplate, DEFAULT_ATTRIBUTION, DEFAULT_TILE_URL, DEFAULT_ZOOM};

use crate::domain::model::Coordinate;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::fs::write_atomic;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct MapRenderer {
    template: MapTemplate,
}

impl MapRenderer {
    pub fn new(template: MapTemplate) -> Self {
        Self { template }
    }

    /// Build a renderer from run configuration, loading a custom template
    /// file when one is configured.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base = match config.template_file() {
            Some(path) => MapTemplate::from_html(fs::read_to_string(path)?)?,
            None => MapTemplate::default(),
        };
        Ok(Self::new(
            base.with_tile_url(config.tile_url())
                .with_attribution(config.attribution())
                .with_zoom(config.zoom()),
        ))
    }

    pub fn template(&self) -> &MapTemplate {
        &self.template
    }

    /// Write a single-marker map page for the given position.
    ///
    /// Range validation happens before any I/O; out-of-range input leaves the
    /// filesystem untouched. Returns the absolute path of the written file.
    pub fn write_map(&self, latitude: f64, longitude: f64, output: &Path) -> Result<PathBuf> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        self.write_coordinate(&coordinate, output)
    }

    /// Same as [`write_map`](Self::write_map) for an already-validated value.
    pub fn write_coordinate(&self, coordinate: &Coordinate, output: &Path) -> Result<PathBuf> {
        let html = self.template.render(coordinate);
        write_atomic(output, html.as_bytes())?;
        Ok(output.canonicalize()?)
    }
}
