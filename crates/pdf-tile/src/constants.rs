//! Shared constants for poster tiling

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch (PDF user space unit)
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert inches to points
#[inline]
pub fn in_to_pt(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}

/// Convert points to inches
#[inline]
pub fn pt_to_in(pt: f32) -> f32 {
    pt / POINTS_PER_INCH
}

// =============================================================================
// Output Tile
// =============================================================================

/// Output page width in inches. Smaller than 8.5" to leave a printer margin.
pub const TILE_WIDTH_IN: f32 = 8.0;

/// Output page height in inches. Smaller than 11" to leave a printer margin.
pub const TILE_HEIGHT_IN: f32 = 10.5;

/// Poster inches covered by one grid row (divides the poster length)
pub const ROW_SPAN_IN: f32 = 8.0;

/// Poster inches covered by one grid column (divides the poster width)
pub const COLUMN_SPAN_IN: f32 = 10.5;

// =============================================================================
// Page Size Comparison
// =============================================================================

/// Two page dimensions closer than this (points) count as equal
pub const PAGE_SIZE_TOLERANCE_PT: f32 = 0.01;

/// MediaBox lookups give up after this many `Parent` hops
pub const MAX_INHERITANCE_DEPTH: usize = 32;
