use std::path::Path;

use tracing::debug;

use crate::error::{FileError, Result};

/// Extract the full text of a PDF file, page-concatenated.
///
/// No layout structure is preserved; the result is a flat string.
pub fn read_pdf(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FileError::NotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let text = pdf_extract::extract_text(path).map_err(|source| FileError::Pdf {
        path: path.display().to_string(),
        source,
    })?;

    debug!("extracted {} chars of PDF text from {}", text.len(), path.display());
    Ok(text)
}
