//! Layout data types for tiling
//!
//! These types sit between the grid arithmetic and PDF rendering.

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Crop grid laid over one source page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGrid {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
    /// Width of each crop cell in points
    pub cell_width_pt: f32,
    /// Height of each crop cell in points
    pub cell_height_pt: f32,
}

impl TileGrid {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether the interiors of two rectangles intersect
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}

/// One output page: a crop of a source page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Index of the source page (0-based)
    pub source_page: usize,
    /// Grid cell this tile was cut from
    pub position: GridPosition,
    /// Crop rectangle, relative to the source MediaBox origin
    pub crop: Rect,
    /// Lower-left corner of the source MediaBox
    pub media_origin: (f32, f32),
}

impl Tile {
    /// Offset that moves the crop's lower-left corner onto the output origin
    pub fn translation(&self) -> (f32, f32) {
        let (ox, oy) = self.media_origin;
        // 0.0 - x rather than -x: a zero offset stays +0 and prints as "0", not "-0"
        (0.0 - (ox + self.crop.x), 0.0 - (oy + self.crop.y))
    }
}
