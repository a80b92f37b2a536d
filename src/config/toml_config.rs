use crate::domain::ports::ConfigProvider;
use crate::render::{DEFAULT_ATTRIBUTION, DEFAULT_TILE_URL, DEFAULT_ZOOM};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: Option<PipelineMeta>,
    pub scan: ScanConfig,
    pub map: Option<MapConfig>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub source_dir: String,
    pub max_depth: Option<usize>,
    pub follow_links: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub zoom: Option<u8>,
    pub tile_url: Option<String>,
    pub attribution: Option<String>,
    pub template_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_dir: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn source_dir(&self) -> &str {
        &self.scan.source_dir
    }

    fn output_dir(&self) -> &str {
        &self.output.output_dir
    }

    fn zoom(&self) -> u8 {
        self.map
            .as_ref()
            .and_then(|m| m.zoom)
            .unwrap_or(DEFAULT_ZOOM)
    }

    fn tile_url(&self) -> &str {
        self.map
            .as_ref()
            .and_then(|m| m.tile_url.as_deref())
            .unwrap_or(DEFAULT_TILE_URL)
    }

    fn attribution(&self) -> &str {
        self.map
            .as_ref()
            .and_then(|m| m.attribution.as_deref())
            .unwrap_or(DEFAULT_ATTRIBUTION)
    }

    fn template_file(&self) -> Option<&str> {
        self.map.as_ref().and_then(|m| m.template_file.as_deref())
    }

    fn max_depth(&self) -> Option<usize> {
        self.scan.max_depth
    }

    fn follow_links(&self) -> bool {
        self.scan.follow_links.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("scan.source_dir", &self.scan.source_dir)?;
        validate_path("output.output_dir", &self.output.output_dir)?;
        validate_url("map.tile_url", self.tile_url())?;
        validate_non_empty_string("map.attribution", self.attribution())?;
        validate_range("map.zoom", self.zoom(), 0, 19)?;
        if let Some(template) = self.template_file() {
            validate_path("map.template_file", template)?;
        }
        Ok(())
    }
}
