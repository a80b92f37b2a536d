pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::render::{DEFAULT_ATTRIBUTION, DEFAULT_TILE_URL, DEFAULT_ZOOM};
#[cfg(feature = "cli")]
use crate::utils::error::{ExifMapError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "exifmap")]
#[command(about = "Extract GPS positions from photo EXIF data and render them on a map")]
pub struct CliConfig {
    /// Image file (single map) or directory of images (photo map) to process
    pub input: Option<String>,

    #[arg(long, default_value = "./map-output")]
    pub output_dir: String,

    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: u8,

    #[arg(long, default_value = DEFAULT_TILE_URL)]
    pub tile_url: String,

    #[arg(long, default_value = DEFAULT_ATTRIBUTION)]
    pub attribution: String,

    /// Custom HTML template for single-marker pages
    #[arg(long)]
    pub template: Option<String>,

    /// Maximum directory depth to scan
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Follow symbolic links while scanning
    #[arg(long)]
    pub follow_links: bool,

    /// Path to a TOML configuration file (replaces the flags above)
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source_dir(&self) -> &str {
        self.input.as_deref().unwrap_or(".")
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn zoom(&self) -> u8 {
        self.zoom
    }

    fn tile_url(&self) -> &str {
        &self.tile_url
    }

    fn attribution(&self) -> &str {
        &self.attribution
    }

    fn template_file(&self) -> Option<&str> {
        self.template.as_deref()
    }

    fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    fn follow_links(&self) -> bool {
        self.follow_links
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.config.is_none() {
            let input = self.input.as_deref().ok_or_else(|| ExifMapError::Config {
                message: "an input file or directory is required unless --config is given"
                    .to_string(),
            })?;
            validate_path("input", input)?;
        }
        validate_path("output_dir", &self.output_dir)?;
        validate_url("tile_url", &self.tile_url)?;
        validate_non_empty_string("attribution", &self.attribution)?;
        validate_range("zoom", self.zoom, 0, 19)?;
        if let Some(template) = &self.template {
            validate_path("template", template)?;
        }
        Ok(())
    }
}
