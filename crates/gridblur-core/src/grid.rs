//! A dense, fixed-size grid of [`ColorSample`]s.
//!
//! Cells are stored row-major in a single buffer: cell `(x, y)` lives at
//! `y * width + x`, where `x` is the column and `y` the row.

use std::ops::Index;

use crate::color::ColorSample;
use crate::error::BlurError;

/// A `width x height` grid where every cell holds a color.
///
/// Both dimensions are always greater than zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<ColorSample>,
}

/// Saturating conversion used only for error reporting.
fn as_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Number of cells in a `width x height` grid, rejecting empty or overflowing sizes.
pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize, BlurError> {
    if width == 0 || height == 0 {
        return Err(BlurError::non_positive(as_i64(width), as_i64(height)));
    }
    width
        .checked_mul(height)
        // Keep room for the flat RGB representation.
        .filter(|n| n.checked_mul(3).is_some())
        .ok_or_else(|| BlurError::overflow(as_i64(width), as_i64(height)))
}

impl PixelGrid {
    /// Create a grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`BlurError::InvalidDimensions`] if either dimension is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridblur_core::{ColorSample, PixelGrid};
    /// let grid = PixelGrid::new(3, 2, ColorSample::WHITE).unwrap();
    /// assert_eq!(grid.len(), 6);
    /// assert!(PixelGrid::new(0, 2, ColorSample::WHITE).is_err());
    /// ```
    pub fn new(width: usize, height: usize, fill: ColorSample) -> Result<Self, BlurError> {
        let len = cell_count(width, height)?;
        Ok(PixelGrid {
            width,
            height,
            cells: vec![fill; len],
        })
    }

    /// Create a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, BlurError>
    where
        F: FnMut(usize, usize) -> ColorSample,
    {
        let len = cell_count(width, height)?;
        let mut cells = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Ok(PixelGrid {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from a row-major matrix literal. `rows[y][x]` becomes cell `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`BlurError::InvalidDimensions`] for an empty matrix and
    /// [`BlurError::RaggedRows`] when rows differ in length.
    pub fn from_rows(rows: Vec<Vec<ColorSample>>) -> Result<Self, BlurError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let len = cell_count(width, height)?;

        let mut cells = Vec::with_capacity(len);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(BlurError::RaggedRows {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(PixelGrid {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from a flat RGB byte buffer in row-major order (3 bytes per cell).
    ///
    /// # Errors
    ///
    /// [`BlurError::InvalidDimensions`] for zero dimensions and
    /// [`BlurError::BufferLengthMismatch`] if `bytes.len() != width * height * 3`.
    pub fn from_rgb_bytes(bytes: &[u8], width: usize, height: usize) -> Result<Self, BlurError> {
        let len = cell_count(width, height)?;
        let expected = len * 3;
        if bytes.len() != expected {
            return Err(BlurError::BufferLengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let cells = bytes
            .chunks_exact(3)
            .map(|px| ColorSample::new(px[0], px[1], px[2]))
            .collect();
        Ok(PixelGrid {
            width,
            height,
            cells,
        })
    }

    /// Flatten the grid into RGB bytes, the inverse of [`PixelGrid::from_rgb_bytes`].
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.cells.len() * 3);
        for cell in &self.cells {
            bytes.extend_from_slice(&cell.channels());
        }
        bytes
    }

    /// Assemble a grid from parts whose consistency the caller has already checked.
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<ColorSample>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        PixelGrid {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The color at column `x`, row `y`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<ColorSample> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Overwrite the color at `(x, y)`, returning the previous one.
    /// Returns `None` and leaves the grid untouched when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, color: ColorSample) -> Option<ColorSample> {
        if x < self.width && y < self.height {
            let cell = &mut self.cells[y * self.width + x];
            Some(std::mem::replace(cell, color))
        } else {
            None
        }
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[ColorSample]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[ColorSample] {
        &self.cells
    }
}

impl Index<(usize, usize)> for PixelGrid {
    type Output = ColorSample;

    /// Index by `(x, y)`. Panics when out of bounds.
    fn index(&self, (x, y): (usize, usize)) -> &ColorSample {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[y * self.width + x]
    }
}
