//! Blurring: convolve a grid with the fixed 3x3 kernel.
//!
//! Each output cell is the truncated weighted average of its in-bounds 3x3
//! neighbourhood in the input. Rows are independent, so with the `parallel`
//! feature they are computed on the rayon thread pool.

use log::{debug, trace};

use crate::color::ColorSample;
use crate::error::BlurError;
use crate::grid::{cell_count, PixelGrid};
use crate::kernel::{effective_weight_sum, BLUR_KERNEL};

/// Blur a grid, returning a new grid of the same size.
///
/// `width` and `height` are the dimensions the caller believes the grid has;
/// they are checked against the grid before any work is done.
///
/// For every cell and every channel the result is
/// `sum(weight * neighbour) / sum(weight)` over the neighbours inside the
/// grid, using truncating integer division.
///
/// # Errors
///
/// * [`BlurError::InvalidDimensions`] if `width <= 0` or `height <= 0`.
/// * [`BlurError::GridSizeMismatch`] if the grid is not `width x height`.
///
/// # Examples
///
/// ```
/// use gridblur_core::{blur, ColorSample, PixelGrid};
///
/// let mut grid = PixelGrid::new(3, 3, ColorSample::BLACK).unwrap();
/// grid.set(1, 1, ColorSample::WHITE);
///
/// let blurred = blur(&grid, 3, 3).unwrap();
/// assert_eq!(blurred[(1, 1)], ColorSample::new(63, 63, 63));
/// ```
pub fn blur(grid: &PixelGrid, width: i64, height: i64) -> Result<PixelGrid, BlurError> {
    let (w, h) = validate_dimensions(width, height)?;
    if w != grid.width() || h != grid.height() {
        trace!(
            "rejecting blur: declared {width}x{height}, grid is {}x{}",
            grid.width(),
            grid.height()
        );
        return Err(BlurError::GridSizeMismatch {
            declared_width: width,
            declared_height: height,
            actual_width: grid.width(),
            actual_height: grid.height(),
        });
    }

    let cells = blur_cells(grid.as_slice(), w, h);
    Ok(PixelGrid::from_parts(w, h, cells))
}

/// Blur a flat RGB buffer (row-major, 3 bytes per cell).
///
/// # Errors
///
/// * [`BlurError::InvalidDimensions`] if `width <= 0` or `height <= 0`.
/// * [`BlurError::BufferLengthMismatch`] if `pixels.len() != width * height * 3`.
///
/// # Examples
///
/// ```
/// use gridblur_core::blur_rgb;
/// let pixels = vec![200u8; 4 * 4 * 3];
/// assert_eq!(blur_rgb(&pixels, 4, 4).unwrap(), pixels);
/// ```
pub fn blur_rgb(pixels: &[u8], width: i64, height: i64) -> Result<Vec<u8>, BlurError> {
    let (w, h) = validate_dimensions(width, height)?;
    let grid = PixelGrid::from_rgb_bytes(pixels, w, h)?;
    let cells = blur_cells(grid.as_slice(), w, h);
    Ok(PixelGrid::from_parts(w, h, cells).to_rgb_bytes())
}

/// Check that both dimensions are positive and addressable.
fn validate_dimensions(width: i64, height: i64) -> Result<(usize, usize), BlurError> {
    if width <= 0 || height <= 0 {
        trace!("rejecting blur: {width}x{height} is not a valid size");
        return Err(BlurError::non_positive(width, height));
    }
    let w = usize::try_from(width).map_err(|_| BlurError::overflow(width, height))?;
    let h = usize::try_from(height).map_err(|_| BlurError::overflow(width, height))?;
    cell_count(w, h).map_err(|_| BlurError::overflow(width, height))?;
    Ok((w, h))
}

fn blur_cells(src: &[ColorSample], width: usize, height: usize) -> Vec<ColorSample> {
    let mut out = vec![ColorSample::default(); src.len()];

    #[cfg(feature = "parallel")]
    {
        debug!("blurring {width}x{height} grid on the rayon pool");
        blur_rows_parallel(src, width, height, &mut out);
    }

    #[cfg(not(feature = "parallel"))]
    {
        debug!("blurring {width}x{height} grid");
        blur_rows_sequential(src, width, height, &mut out);
    }

    out
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn blur_rows_sequential(src: &[ColorSample], width: usize, height: usize, out: &mut [ColorSample]) {
    for (y, row) in out.chunks_exact_mut(width).enumerate() {
        blur_row(src, width, height, y, row);
    }
}

#[cfg(feature = "parallel")]
fn blur_rows_parallel(src: &[ColorSample], width: usize, height: usize, out: &mut [ColorSample]) {
    use rayon::prelude::*;

    out.par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(y, row)| blur_row(src, width, height, y, row));
}

/// Compute output row `y` into `out` (exactly `width` cells).
fn blur_row(src: &[ColorSample], width: usize, height: usize, y: usize, out: &mut [ColorSample]) {
    let neighbours = [
        y.checked_sub(1).map(|r| source_row(src, width, r)),
        Some(source_row(src, width, y)),
        (y + 1 < height).then(|| source_row(src, width, y + 1)),
    ];

    for (x, cell) in out.iter_mut().enumerate() {
        let mut acc = [0u32; 3];
        for (weights, row) in BLUR_KERNEL.iter().zip(&neighbours) {
            let Some(row) = row else { continue };
            if x > 0 {
                accumulate(&mut acc, row[x - 1], weights[0]);
            }
            accumulate(&mut acc, row[x], weights[1]);
            if x + 1 < width {
                accumulate(&mut acc, row[x + 1], weights[2]);
            }
        }

        let divisor = effective_weight_sum(x, y, width, height);
        *cell = ColorSample::new(
            narrow(acc[0] / divisor),
            narrow(acc[1] / divisor),
            narrow(acc[2] / divisor),
        );
    }
}

#[inline(always)]
fn source_row(src: &[ColorSample], width: usize, y: usize) -> &[ColorSample] {
    &src[y * width..(y + 1) * width]
}

#[inline(always)]
fn accumulate(acc: &mut [u32; 3], color: ColorSample, weight: u32) {
    acc[0] += weight * color.r as u32;
    acc[1] += weight * color.g as u32;
    acc[2] += weight * color.b as u32;
}

/// Clamp to the channel range. A weighted average of bytes never exceeds 255.
#[inline(always)]
fn narrow(value: u32) -> u8 {
    value.min(u8::MAX as u32) as u8
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::kernel::weight;

    /// Direct per-cell evaluation of the kernel, used as a reference.
    fn reference_blur(grid: &PixelGrid) -> PixelGrid {
        let (w, h) = (grid.width() as i64, grid.height() as i64);
        PixelGrid::from_fn(grid.width(), grid.height(), |x, y| {
            let mut acc = [0u32; 3];
            let mut divisor = 0u32;
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx < 0 || ny < 0 || nx >= w || ny >= h {
                        continue;
                    }
                    let k = weight(dx as i32, dy as i32);
                    let c = grid[(nx as usize, ny as usize)];
                    acc[0] += k * c.r as u32;
                    acc[1] += k * c.g as u32;
                    acc[2] += k * c.b as u32;
                    divisor += k;
                }
            }
            ColorSample::new(
                (acc[0] / divisor) as u8,
                (acc[1] / divisor) as u8,
                (acc[2] / divisor) as u8,
            )
        })
        .unwrap()
    }

    fn random_grid(rng: &mut StdRng, width: usize, height: usize) -> PixelGrid {
        PixelGrid::from_fn(width, height, |_, _| {
            ColorSample::new(rng.random(), rng.random(), rng.random())
        })
        .unwrap()
    }

    #[test]
    fn test_blur_matches_reference() {
        let mut rng = StdRng::seed_from_u64(7);
        for (w, h) in [(1, 1), (1, 5), (5, 1), (2, 2), (3, 3), (7, 4), (16, 9)] {
            let grid = random_grid(&mut rng, w, h);
            let blurred = blur(&grid, w as i64, h as i64).unwrap();
            assert_eq!(blurred, reference_blur(&grid), "mismatch for {w}x{h}");
        }
    }

    #[test]
    fn test_single_cell_is_unchanged() {
        let grid = PixelGrid::new(1, 1, ColorSample::new(9, 99, 199)).unwrap();
        assert_eq!(blur(&grid, 1, 1).unwrap(), grid);
    }

    #[test]
    fn test_white_impulse_on_black() {
        let mut grid = PixelGrid::new(3, 3, ColorSample::BLACK).unwrap();
        grid.set(1, 1, ColorSample::WHITE);
        let out = blur(&grid, 3, 3).unwrap();
        // 255 * 4 / 16
        assert_eq!(out[(1, 1)], ColorSample::new(63, 63, 63));
        // 255 * 1 / 9
        assert_eq!(out[(0, 0)], ColorSample::new(28, 28, 28));
        // 255 * 2 / 12
        assert_eq!(out[(1, 0)], ColorSample::new(42, 42, 42));
    }

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(validate_dimensions(3, 2), Ok((3, 2)));
        assert!(matches!(
            validate_dimensions(0, 2),
            Err(BlurError::InvalidDimensions { width: 0, height: 2, .. })
        ));
        assert!(validate_dimensions(2, -1).is_err());
        assert!(matches!(
            validate_dimensions(i64::MAX, i64::MAX),
            Err(BlurError::InvalidDimensions {
                reason: "dimensions overflow buffer size calculation",
                ..
            })
        ));
    }

    #[test]
    fn test_narrow_clamps() {
        assert_eq!(narrow(255), 255);
        assert_eq!(narrow(256), 255);
        assert_eq!(narrow(4080), 255);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = random_grid(&mut rng, 64, 48);
        let mut seq = vec![ColorSample::default(); grid.len()];
        let mut par = vec![ColorSample::default(); grid.len()];
        blur_rows_sequential(grid.as_slice(), 64, 48, &mut seq);
        blur_rows_parallel(grid.as_slice(), 64, 48, &mut par);
        assert_eq!(seq, par);
    }
}
