use std::fs;
use std::path::Path;

use crate::error::{FileError, Result};

/// Read a plain-text file as UTF-8, whole-file.
pub fn read_txt(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FileError::NotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    fs::read_to_string(path).map_err(|source| {
        FileError::Read {
            path: path.display().to_string(),
            source,
        }
        .into()
    })
}
