use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to tile")]
    NoPages,
    #[error(
        "Poster too small to tile: {width_in}in x {length_in}in does not fill a single output page"
    )]
    PosterTooSmall { width_in: u32, length_in: u32 },
    #[error(
        "Page {} is {}x{} pt but page 1 is {}x{} pt; use per-page geometry to tile mixed sizes",
        .page, .found.0, .found.1, .expected.0, .expected.1
    )]
    NonUniformPageSize {
        page: usize,
        expected: (f32, f32),
        found: (f32, f32),
    },
    #[error("Page {page} has no usable MediaBox")]
    MissingMediaBox { page: usize },
    #[error("Page {page} has several content streams and one uses an unsupported filter ({filter})")]
    UnsupportedFilter { page: usize, filter: String },
}

pub type Result<T> = std::result::Result<T, TileError>;

/// How crop cells are derived when the source has more than one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageGeometry {
    /// Every page must match the first page's size
    #[default]
    Uniform,
    /// Each page is cut using its own MediaBox
    PerPage,
}

/// Physical size of an output page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSize {
    pub width_in: f32,
    pub height_in: f32,
}

impl TileSize {
    /// Dimensions in points (width, height)
    pub fn dimensions_pt(self) -> (f32, f32) {
        (
            crate::constants::in_to_pt(self.width_in),
            crate::constants::in_to_pt(self.height_in),
        )
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self {
            width_in: crate::constants::TILE_WIDTH_IN,
            height_in: crate::constants::TILE_HEIGHT_IN,
        }
    }
}

/// Statistics about a tiling run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileStatistics {
    /// Number of pages in the source document
    pub source_pages: usize,
    /// Grid rows per source page
    pub rows: usize,
    /// Grid columns per source page
    pub columns: usize,
    /// Output pages produced for each source page (rows * columns)
    pub tiles_per_page: usize,
    /// Output pages produced for the whole document
    pub total_output_pages: usize,
    /// Output page size
    pub tile_size: TileSize,
}
