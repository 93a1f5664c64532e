use std::path::Path;

use serde::Serialize;

/// A single icon loaded from disk. The content is kept verbatim; it is never
/// parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// File name of the icon inside the icons directory.
    pub name: String,
    /// Raw SVG markup.
    pub content: String,
}

impl Icon {
    /// Creates an icon named after the file it was read from.
    pub fn new(path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        Self {
            name: file_name_of(path.as_ref()),
            content: content.into(),
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Ordered icon collection. The position of an icon determines its grid cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    icons: Vec<Icon>,
}

impl IconSet {
    pub fn new(icons: Vec<Icon>) -> Self {
        Self { icons }
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Icon> {
        self.icons.iter()
    }
}

/// Placement of one icon in the dry-run report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub name: String,
    pub column: u64,
    pub row: u64,
    pub x: u64,
    pub y: u64,
}
