use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::{ComposeError, Result};
use crate::model::{Icon, IconSet};

/// Extension recognised as an icon source, compared case-insensitively.
pub const ICON_EXTENSION: &str = ".svg";

/// Lists the icon files inside `dir`, ordered by file name.
///
/// Fails with [`ComposeError::MissingIconsDir`] when the directory does not
/// exist. Directories whose name happens to end in `.svg` are skipped.
#[instrument(level = "debug", skip_all, fields(dir = %dir.display()))]
pub fn discover_icons(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ComposeError::MissingIconsDir(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if !is_icon_name(&name.to_string_lossy()) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }
        entries.push((name, path));
    }

    entries.sort_by(|lhs, rhs| lhs.0.cmp(&rhs.0));
    debug!(icon_count = entries.len(), "icons discovered");
    Ok(entries.into_iter().map(|(_, path)| path).collect())
}

/// Returns whether `name` carries the icon extension.
pub fn is_icon_name(name: &str) -> bool {
    name.to_lowercase().ends_with(ICON_EXTENSION)
}

/// Reads every icon fully as UTF-8 text, preserving order. The first failure
/// aborts the load.
#[instrument(level = "debug", skip_all, fields(icon_count = paths.len()))]
pub fn load_icons(paths: &[PathBuf]) -> Result<IconSet> {
    let icons = paths
        .iter()
        .map(|path| {
            let content = fs::read_to_string(path).map_err(|source| ComposeError::ReadIcon {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), bytes = content.len(), "icon loaded");
            Ok(Icon::new(path, content))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(IconSet::new(icons))
}
