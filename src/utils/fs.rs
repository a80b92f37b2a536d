use crate::utils::error::{ExifMapError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Compose-in-memory, write-to-temp, rename-into-place. A failed write leaves
/// no partial file at the destination. Parent directories are created as
/// needed.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| ExifMapError::Config {
            message: format!("output path '{}' has no file name", path.display()),
        })?
        .to_string_lossy()
        .into_owned();
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    let write = (|| {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(data)?;
        file.flush()
    })();
    if let Err(err) = write {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }

    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}
