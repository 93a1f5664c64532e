use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::io::{icons, output};
use crate::layout::{GridLayout, LayoutParams, compute_layout};
use crate::model::{IconSet, Placement};
use crate::render::render_document;

/// Result of a successful composer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeOutcome {
    /// The combined document was written.
    Written { icon_count: usize, output: PathBuf },
    /// The icons directory held no icons; nothing was written.
    NoIcons,
}

/// Layout summary produced by a dry run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub layout: GridLayout,
    pub icons: Vec<Placement>,
}

/// Composes every icon in `icons_dir` into one grid document at `output`.
#[instrument(
    level = "info",
    skip_all,
    fields(icons_dir = %icons_dir.display(), output = %output_path.display())
)]
pub fn compose(
    icons_dir: &Path,
    output_path: &Path,
    params: LayoutParams,
) -> Result<ComposeOutcome> {
    let Some((icons, layout)) = prepare(icons_dir, params)? else {
        return Ok(ComposeOutcome::NoIcons);
    };

    let document = render_document(&icons, &layout);
    debug!(bytes = document.len(), "document rendered");
    output::write_document(output_path, &document)?;
    info!(icon_count = icons.len(), "combined document written");

    Ok(ComposeOutcome::Written {
        icon_count: icons.len(),
        output: output_path.to_path_buf(),
    })
}

/// Runs discovery, loading and layout without writing anything.
#[instrument(level = "info", skip_all, fields(icons_dir = %icons_dir.display()))]
pub fn plan(icons_dir: &Path, params: LayoutParams) -> Result<Option<LayoutReport>> {
    let Some((icons, layout)) = prepare(icons_dir, params)? else {
        return Ok(None);
    };

    let placements = icons
        .iter()
        .enumerate()
        .map(|(index, icon)| {
            let (column, row) = layout.cell_of(index);
            let (x, y) = layout.cell_offset(index);
            Placement {
                name: icon.name.clone(),
                column,
                row,
                x,
                y,
            }
        })
        .collect();

    Ok(Some(LayoutReport {
        layout,
        icons: placements,
    }))
}

fn prepare(icons_dir: &Path, params: LayoutParams) -> Result<Option<(IconSet, GridLayout)>> {
    let paths = icons::discover_icons(icons_dir)?;
    if paths.is_empty() {
        warn!("no SVG files found in icons directory");
        return Ok(None);
    }

    let icons = icons::load_icons(&paths)?;
    let layout = compute_layout(icons.len(), params);
    info!(
        icon_count = icons.len(),
        rows = layout.rows(),
        raw_width = layout.raw_width,
        raw_height = layout.raw_height,
        "layout computed"
    );
    Ok(Some((icons, layout)))
}
