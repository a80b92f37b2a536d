use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::fs::write_atomic;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at an output directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(path);
        write_atomic(&full_path, data)?;
        Ok(full_path.canonicalize()?)
    }
}
