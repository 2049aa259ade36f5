pub mod constants;
pub mod layout;
mod options;
pub mod render;
mod stats;
pub mod tile;
mod types;

pub use options::*;
pub use stats::calculate_statistics;
pub use tile::{load_pdf, plan_tiles, save_pdf, tile, tile_pdf};
pub use types::*;
