//! Layout calculation modules for tiling
//!
//! This module handles the geometric side of tiling:
//! - Grid dimensions (how many rows and columns a poster needs)
//! - Crop rectangles (which part of the source page each tile shows)

mod grid;
mod types;

pub use grid::*;
pub use types::*;
