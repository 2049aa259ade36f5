use crate::layout::grid_dimensions;
use crate::options::TileOptions;
use crate::tile::plan_pages;
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for tiling a document, without rendering it.
///
/// Runs the same planning pass as [`crate::tile`], so any document the tiler
/// would reject (mixed page sizes, missing MediaBox) is rejected here too.
pub fn calculate_statistics(document: &Document, options: &TileOptions) -> Result<TileStatistics> {
    let plans = plan_pages(document, options)?;
    let (rows, columns) = grid_dimensions(options.poster_width_in, options.poster_length_in)?;

    Ok(TileStatistics {
        source_pages: plans.len(),
        rows,
        columns,
        tiles_per_page: rows * columns,
        total_output_pages: plans.iter().map(|plan| plan.tiles.len()).sum(),
        tile_size: TileSize::default(),
    })
}
