//! Tile planning: which crop of which source page lands on each output page

use crate::constants::PAGE_SIZE_TOLERANCE_PT;
use crate::layout::{Rect, Tile, create_tile_grid, crop_rect, grid_dimensions, tile_positions};
use crate::options::TileOptions;
use crate::render::page_media_box;
use crate::types::*;
use lopdf::{Document, ObjectId};

/// A source page with its resolved MediaBox and the tiles cut from it
#[derive(Debug, Clone)]
pub(crate) struct PagePlan {
    pub source_page: usize,
    pub page_id: ObjectId,
    pub media_box: Rect,
    pub tiles: Vec<Tile>,
}

/// Plan every tile of every page, in output order.
///
/// Validates the options first, so a poster smaller than one output page is
/// reported as [`TileError::PosterTooSmall`] before any page is inspected.
pub fn plan_tiles(document: &Document, options: &TileOptions) -> Result<Vec<Tile>> {
    Ok(plan_pages(document, options)?
        .into_iter()
        .flat_map(|plan| plan.tiles)
        .collect())
}

pub(crate) fn plan_pages(document: &Document, options: &TileOptions) -> Result<Vec<PagePlan>> {
    options.validate()?;
    let (rows, columns) = grid_dimensions(options.poster_width_in, options.poster_length_in)?;

    let page_ids: Vec<ObjectId> = document.get_pages().values().copied().collect();
    if page_ids.is_empty() {
        return Err(TileError::NoPages);
    }

    let media_boxes = page_ids
        .iter()
        .enumerate()
        .map(|(index, &id)| page_media_box(document, id, index))
        .collect::<Result<Vec<_>>>()?;

    if options.page_geometry == PageGeometry::Uniform {
        check_uniform(&media_boxes)?;
    }

    let plans = page_ids
        .into_iter()
        .zip(media_boxes)
        .enumerate()
        .map(|(source_page, (page_id, media_box))| {
            let grid = create_tile_grid(rows, columns, media_box.width, media_box.height);
            let tiles = tile_positions(&grid)
                .map(|position| Tile {
                    source_page,
                    position,
                    crop: crop_rect(&grid, position),
                    media_origin: (media_box.x, media_box.y),
                })
                .collect();
            PagePlan {
                source_page,
                page_id,
                media_box,
                tiles,
            }
        })
        .collect();

    Ok(plans)
}

/// Every page must have the first page's width and height.
fn check_uniform(media_boxes: &[Rect]) -> Result<()> {
    let Some(first) = media_boxes.first() else {
        return Ok(());
    };

    for (index, mb) in media_boxes.iter().enumerate().skip(1) {
        let same = (mb.width - first.width).abs() <= PAGE_SIZE_TOLERANCE_PT
            && (mb.height - first.height).abs() <= PAGE_SIZE_TOLERANCE_PT;
        if !same {
            return Err(TileError::NonUniformPageSize {
                page: index + 1,
                expected: (first.width, first.height),
                found: (mb.width, mb.height),
            });
        }
    }

    Ok(())
}
