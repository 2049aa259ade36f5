//! Grid layout calculation
//!
//! This module handles the geometry of the crop grid laid over a poster page:
//! how many tiles it splits into and where each crop rectangle sits.

use crate::constants::{COLUMN_SPAN_IN, ROW_SPAN_IN};
use crate::types::{Result, TileError};

use super::{GridPosition, Rect, TileGrid};

// =============================================================================
// Grid Dimensions
// =============================================================================

/// Number of (rows, columns) a poster splits into.
///
/// The poster length is divided by [`ROW_SPAN_IN`] and the width by
/// [`COLUMN_SPAN_IN`], truncating. A poster that does not fill at least one
/// row and one column is rejected.
pub fn grid_dimensions(poster_width_in: u32, poster_length_in: u32) -> Result<(usize, usize)> {
    let rows = (f64::from(poster_length_in) / f64::from(ROW_SPAN_IN)).floor() as usize;
    let columns = (f64::from(poster_width_in) / f64::from(COLUMN_SPAN_IN)).floor() as usize;

    if rows == 0 || columns == 0 {
        return Err(TileError::PosterTooSmall {
            width_in: poster_width_in,
            length_in: poster_length_in,
        });
    }

    Ok((rows, columns))
}

// =============================================================================
// Grid Creation
// =============================================================================

/// Create the crop grid for one source page.
///
/// # Arguments
/// * `rows` - Number of grid rows (at least 1)
/// * `columns` - Number of grid columns (at least 1)
/// * `page_width_pt` - Source page width in points
/// * `page_height_pt` - Source page height in points
pub fn create_tile_grid(
    rows: usize,
    columns: usize,
    page_width_pt: f32,
    page_height_pt: f32,
) -> TileGrid {
    debug_assert!(rows > 0 && columns > 0);

    TileGrid {
        rows,
        columns,
        cell_width_pt: page_width_pt / columns as f32,
        cell_height_pt: page_height_pt / rows as f32,
    }
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Calculate the crop rectangle of the cell at the given grid position.
///
/// Row 0 is the top of the poster, so it maps to the highest y in PDF space.
pub fn crop_rect(grid: &TileGrid, pos: GridPosition) -> Rect {
    let x = pos.col as f32 * grid.cell_width_pt;
    let y = (grid.rows - pos.row - 1) as f32 * grid.cell_height_pt;

    Rect::new(x, y, grid.cell_width_pt, grid.cell_height_pt)
}

/// All grid positions in output order: top row first, left to right.
pub fn tile_positions(grid: &TileGrid) -> impl Iterator<Item = GridPosition> + use<> {
    let columns = grid.columns;
    (0..grid.rows).flat_map(move |row| (0..columns).map(move |col| GridPosition::new(row, col)))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions_truncate() {
        // 17 / 10.5 = 1.6 -> 1 column, 22 / 8 = 2.75 -> 2 rows
        assert_eq!(grid_dimensions(17, 22).unwrap(), (2, 1));
        assert_eq!(grid_dimensions(21, 16).unwrap(), (2, 2));
        assert_eq!(grid_dimensions(42, 48).unwrap(), (6, 4));
    }

    #[test]
    fn test_grid_dimensions_exact_boundaries() {
        // 10 / 10.5 < 1 column
        assert!(grid_dimensions(10, 8).is_err());
        // 11 / 10.5 -> 1 column, 8 / 8 -> 1 row
        assert_eq!(grid_dimensions(11, 8).unwrap(), (1, 1));
        // 7 / 8 < 1 row
        assert!(grid_dimensions(11, 7).is_err());
    }

    #[test]
    fn test_grid_dimensions_too_small() {
        match grid_dimensions(5, 5) {
            Err(TileError::PosterTooSmall {
                width_in,
                length_in,
            }) => {
                assert_eq!(width_in, 5);
                assert_eq!(length_in, 5);
            }
            other => panic!("Expected PosterTooSmall, got {:?}", other),
        }
    }

    #[test]
    fn test_create_tile_grid() {
        let grid = create_tile_grid(2, 1, 1224.0, 1584.0);

        assert_eq!(grid.rows, 2);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.cell_width_pt, 1224.0);
        assert_eq!(grid.cell_height_pt, 792.0);
        assert_eq!(grid.cell_count(), 2);
    }

    #[test]
    fn test_crop_rect_inverts_rows() {
        let grid = create_tile_grid(3, 2, 800.0, 900.0);

        // Top-left cell sits at the top of PDF space
        let top_left = crop_rect(&grid, GridPosition::new(0, 0));
        assert_eq!(top_left, Rect::new(0.0, 600.0, 400.0, 300.0));

        // Bottom-right cell sits at the PDF origin row
        let bottom_right = crop_rect(&grid, GridPosition::new(2, 1));
        assert_eq!(bottom_right, Rect::new(400.0, 0.0, 400.0, 300.0));
        assert_eq!(bottom_right.right(), 800.0);
        assert_eq!(bottom_right.top(), 300.0);
    }

    #[test]
    fn test_tile_positions_row_major() {
        let grid = create_tile_grid(2, 3, 300.0, 200.0);
        let positions: Vec<_> = tile_positions(&grid).collect();

        assert_eq!(
            positions,
            vec![
                GridPosition::new(0, 0),
                GridPosition::new(0, 1),
                GridPosition::new(0, 2),
                GridPosition::new(1, 0),
                GridPosition::new(1, 1),
                GridPosition::new(1, 2),
            ]
        );
    }
}
