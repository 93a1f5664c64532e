use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ComposeError, Result};

/// Writes the composed document to `path`, creating missing parent
/// directories. Surrounding whitespace is trimmed and any existing file is
/// replaced.
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    let write_error = |source| ComposeError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!(dir = %parent.display(), "creating output directory");
            fs::create_dir_all(parent).map_err(write_error)?;
        }
    }

    fs::write(path, document.trim()).map_err(write_error)
}
