//! The fixed 3x3 blur kernel.
//!
//! ```text
//! 1 2 1
//! 2 4 2
//! 1 2 1
//! ```
//!
//! Neighbours that fall outside the grid are dropped from both the weighted sum
//! and the divisor, so border cells are normalized by a smaller weight sum
//! instead of being padded.

/// Kernel weights, indexed `[dy + 1][dx + 1]`.
pub const BLUR_KERNEL: [[u32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];

/// Sum of all kernel weights; the divisor for interior cells.
pub const KERNEL_WEIGHT_SUM: u32 = 16;

/// Weight for the neighbour at offset `(dx, dy)`, both in `-1..=1`.
/// Offsets outside that range have weight zero.
///
/// # Examples
///
/// ```
/// use gridblur_core::kernel::weight;
/// assert_eq!(weight(0, 0), 4);
/// assert_eq!(weight(1, 0), 2);
/// assert_eq!(weight(-1, 1), 1);
/// assert_eq!(weight(2, 0), 0);
/// ```
#[inline]
pub const fn weight(dx: i32, dy: i32) -> u32 {
    if dx < -1 || dx > 1 || dy < -1 || dy > 1 {
        return 0;
    }
    BLUR_KERNEL[(dy + 1) as usize][(dx + 1) as usize]
}

/// Per-axis weights `[left, centre, right]`. The 2D kernel is the outer
/// product of this with itself.
const AXIS: [u32; 3] = [1, 2, 1];

/// Sum of the axis weights whose offset lands inside `0..len` at position `pos`.
/// Zero when `pos` itself is outside `0..len`.
#[inline]
fn axis_sum(pos: usize, len: usize) -> u32 {
    if pos >= len {
        return 0;
    }
    let mut sum = AXIS[1];
    if pos > 0 {
        sum += AXIS[0];
    }
    if pos < len - 1 {
        sum += AXIS[2];
    }
    sum
}

/// The divisor used for cell `(x, y)` of a `width x height` grid: the sum of
/// the kernel weights whose neighbour lies inside the grid.
///
/// The kernel is separable, so this is the product of the in-bounds
/// horizontal and vertical weight sums. A cell outside the grid (including
/// any cell of an empty grid) has no neighbourhood and yields 0.
///
/// # Examples
///
/// ```
/// use gridblur_core::kernel::effective_weight_sum;
/// assert_eq!(effective_weight_sum(1, 1, 3, 3), 16); // interior
/// assert_eq!(effective_weight_sum(1, 0, 3, 3), 12); // edge
/// assert_eq!(effective_weight_sum(0, 0, 3, 3), 9); // corner
/// assert_eq!(effective_weight_sum(0, 0, 1, 1), 4); // lone cell
/// assert_eq!(effective_weight_sum(5, 0, 3, 3), 0); // outside
/// ```
#[inline]
pub fn effective_weight_sum(x: usize, y: usize, width: usize, height: usize) -> u32 {
    axis_sum(x, width) * axis_sum(y, height)
}
