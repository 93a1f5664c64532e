use serde::Serialize;

use crate::error::{ComposeError, Result};

/// Number of icons placed on each grid row.
pub const ICONS_PER_ROW: u64 = 15;
/// Edge length of one grid cell in the document's internal coordinates.
pub const GRID_SIZE: u64 = 300;
/// Displayed edge length of a single icon once the document is scaled.
pub const ICON_VIEW_SIZE: u64 = 48;
/// Margin baked into the icon cell convention, trimmed from the raw extents.
pub const PADDING_OFFSET: u64 = 44;

/// Fixed parameters of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutParams {
    per_row: u64,
    cell_size: u64,
    view_size: u64,
    padding: u64,
}

impl LayoutParams {
    /// Builds a custom parameter set. At least one icon per row is required and
    /// the padding must leave a positive effective cell.
    pub fn new(per_row: u64, cell_size: u64, view_size: u64, padding: u64) -> Result<Self> {
        if per_row == 0 {
            return Err(ComposeError::InvalidLayout(
                "at least one icon per row is required".to_string(),
            ));
        }
        if cell_size <= padding {
            return Err(ComposeError::InvalidLayout(format!(
                "cell size {cell_size} must exceed padding {padding}"
            )));
        }
        Ok(Self {
            per_row,
            cell_size,
            view_size,
            padding,
        })
    }

    pub fn per_row(&self) -> u64 {
        self.per_row
    }

    pub fn cell_size(&self) -> u64 {
        self.cell_size
    }

    pub fn view_size(&self) -> u64 {
        self.view_size
    }

    pub fn padding(&self) -> u64 {
        self.padding
    }

    /// Ratio between the displayed icon size and the effective cell size.
    pub fn scale(&self) -> f64 {
        self.view_size as f64 / (self.cell_size - self.padding) as f64
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            per_row: ICONS_PER_ROW,
            cell_size: GRID_SIZE,
            view_size: ICON_VIEW_SIZE,
            padding: PADDING_OFFSET,
        }
    }
}

/// Dimensions derived once per build from the icon count.
///
/// `raw_width` and `raw_height` describe the `viewBox`; `width` and `height`
/// are the rendered size after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLayout {
    pub params: LayoutParams,
    pub icon_count: u64,
    pub raw_width: i64,
    pub raw_height: i64,
    pub scale: f64,
    pub width: f64,
    pub height: f64,
}

/// Computes the grid dimensions for `icon_count` icons.
pub fn compute_layout(icon_count: usize, params: LayoutParams) -> GridLayout {
    let count = icon_count as u64;
    let cell = params.cell_size;
    let padding = params.padding as i64;

    let raw_width = (params.per_row * cell).min(count * cell) as i64 - padding;
    let raw_height = (count.div_ceil(params.per_row) * cell) as i64 - padding;
    let scale = params.scale();

    GridLayout {
        params,
        icon_count: count,
        raw_width,
        raw_height,
        scale,
        width: raw_width as f64 * scale,
        height: raw_height as f64 * scale,
    }
}

impl GridLayout {
    /// Number of rows the icons occupy.
    pub fn rows(&self) -> u64 {
        self.icon_count.div_ceil(self.params.per_row)
    }

    /// Column and row of the icon at `index`.
    pub fn cell_of(&self, index: usize) -> (u64, u64) {
        let index = index as u64;
        (index % self.params.per_row, index / self.params.per_row)
    }

    /// Translation applied to the icon at `index`.
    pub fn cell_offset(&self, index: usize) -> (u64, u64) {
        let (column, row) = self.cell_of(index);
        (column * self.params.cell_size, row * self.params.cell_size)
    }
}
