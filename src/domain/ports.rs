use crate::domain::model::PhotoLocation;
use crate::utils::error::Result;
use std::path::PathBuf;

/// File-writing capability for pipeline outputs.
pub trait Storage: Send + Sync {
    /// Write `data` at `path` relative to the storage root, creating parent
    /// directories as needed. Returns the absolute path of the written file.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf>;
}

/// Everything a pipeline needs to know about its run.
pub trait ConfigProvider: Send + Sync {
    fn source_dir(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn zoom(&self) -> u8;
    fn tile_url(&self) -> &str;
    fn attribution(&self) -> &str;
    fn template_file(&self) -> Option<&str> {
        None
    }
    fn max_depth(&self) -> Option<usize> {
        None
    }
    fn follow_links(&self) -> bool {
        false
    }
}

/// Outcome of the transform step: ordered records plus the serialized
/// `geodata.js` body ready for the load stage.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub locations: Vec<PhotoLocation>,
    pub geodata_js: String,
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<PhotoLocation>>;
    fn transform(&self, records: Vec<PhotoLocation>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
