//! Logical to physical pixel addressing for zig-zag wired matrices.
//!
//! Matrix strips are commonly soldered in a boustrophedon pattern: the data
//! line snakes back along every other row, so odd rows are wired in reversed
//! column order. Every rendering operation must route through
//! [`MatrixGeometry::physical_index`] or pixels land in the wrong physical
//! location.

/// Dimensions of a zig-zag wired LED matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixGeometry {
    /// Number of pixels in each row
    pub pixels_per_row: u16,
    /// Number of rows
    pub row_count: u16,
}

impl MatrixGeometry {
    /// Create a new matrix geometry
    pub const fn new(pixels_per_row: u16, row_count: u16) -> Self {
        Self {
            pixels_per_row,
            row_count,
        }
    }

    /// Total number of pixels addressed by the matrix
    #[allow(clippy::cast_lossless)]
    pub const fn pixel_count(self) -> usize {
        self.pixels_per_row as usize * self.row_count as usize
    }

    /// Physical pixel index for a logical `(row, col)` coordinate
    ///
    /// Even rows map in wiring order, odd rows map with the column
    /// reversed. Bijective over the full logical domain. Out-of-range
    /// coordinates are a caller contract violation.
    #[allow(clippy::cast_lossless)]
    pub const fn physical_index(self, row: u16, col: u16) -> usize {
        debug_assert!(row < self.row_count);
        debug_assert!(col < self.pixels_per_row);

        let offset = if row.is_multiple_of(2) {
            col
        } else {
            self.pixels_per_row - col - 1
        };
        row as usize * self.pixels_per_row as usize + offset as usize
    }
}
