//! Poster tiling - splitting large pages into printable tiles
//!
//! This module orchestrates the tiling process:
//! 1. Validate options and resolve every source page's MediaBox
//! 2. Plan the crop grid for each page
//! 3. Wrap each source page in a Form XObject
//! 4. Emit one fixed-size output page per tile, drawing the XObject translated

mod io;
mod plan;

pub use io::{load_pdf, save_pdf};
pub use plan::plan_tiles;
pub(crate) use plan::plan_pages;

use crate::constants::pt_to_in;
use crate::options::TileOptions;
use crate::render::{create_page_xobject, finish_document, render_tile_page};
use crate::stats::calculate_statistics;
use crate::types::*;
use lopdf::{Document, ObjectId};
use std::collections::HashMap;
use std::path::Path;

/// Main tiling function
pub async fn tile(document: &Document, options: &TileOptions) -> Result<Document> {
    options.validate()?;
    tile_owned(document.clone(), options).await
}

async fn tile_owned(document: Document, options: &TileOptions) -> Result<Document> {
    let options = options.clone();
    tokio::task::spawn_blocking(move || tile_sync(&document, &options)).await?
}

fn tile_sync(source: &Document, options: &TileOptions) -> Result<Document> {
    let plans = plan_pages(source, options)?;
    let (tile_width_pt, tile_height_pt) = TileSize::default().dimensions_pt();

    if let Some(first) = plans.first() {
        log::info!(
            "Tiling {} page(s) of {:.1}x{:.1} in, {} tile(s) per page",
            plans.len(),
            pt_to_in(first.media_box.width),
            pt_to_in(first.media_box.height),
            first.tiles.len()
        );
    }

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut copy_cache: HashMap<ObjectId, ObjectId> = HashMap::new();

    for plan in &plans {
        if plan.media_box.x != 0.0 || plan.media_box.y != 0.0 {
            log::warn!(
                "Page {} MediaBox starts at ({}, {}); crops are taken relative to that corner",
                plan.source_page + 1,
                plan.media_box.x,
                plan.media_box.y
            );
        }

        let xobject_id = create_page_xobject(
            &mut output,
            source,
            plan.page_id,
            plan.source_page,
            &plan.media_box,
            &mut copy_cache,
        )?;

        for tile in &plan.tiles {
            log::debug!(
                "Page {} tile ({}, {}): crop x={} y={} w={} h={}",
                tile.source_page + 1,
                tile.position.row,
                tile.position.col,
                tile.crop.x,
                tile.crop.y,
                tile.crop.width,
                tile.crop.height
            );
            page_ids.push(render_tile_page(
                &mut output,
                tile,
                xobject_id,
                tile_width_pt,
                tile_height_pt,
                pages_tree_id,
            ));
        }
    }

    finish_document(&mut output, pages_tree_id, &page_ids);
    Ok(output)
}

/// Tile the poster at `source_path` and write the result to `output_path`.
///
/// Returns statistics for the run; `tiles_per_page` is the number of output
/// pages produced per source page, `total_output_pages` covers the whole
/// document.
pub async fn tile_pdf(
    source_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    options: &TileOptions,
) -> Result<TileStatistics> {
    options.validate()?;

    let source = load_pdf(source_path).await?;
    let stats = calculate_statistics(&source, options)?;
    let tiled = tile_owned(source, options).await?;
    save_pdf(tiled, output_path).await?;

    Ok(stats)
}
