use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConvertError;

/// Writes the rendered log, creating the directory when needed.
pub fn write_log(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, ConvertError> {
    fs::create_dir_all(dir).map_err(|source| ConvertError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    fs::write(&path, contents).map_err(|source| ConvertError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
