//! # gridblur-core
//!
//! Deterministic 3x3 blur for grids of 8-bit RGB samples.
//!
//! Every output cell is the weighted average of its neighbourhood under the
//! kernel
//!
//! ```text
//! 1 2 1
//! 2 4 2
//! 1 2 1
//! ```
//!
//! computed per channel with truncating integer division. At the borders the
//! missing neighbours are left out of both the sum and the divisor. Enable the
//! `parallel` feature to spread rows over the rayon thread pool; the output is
//! identical either way.
//!
//! ## Quick Start
//!
//! ```
//! use gridblur_core::{blur, ColorSample, PixelGrid};
//!
//! let mut grid = PixelGrid::new(3, 3, ColorSample::WHITE).unwrap();
//! grid.set(1, 1, ColorSample::RED);
//!
//! let blurred = blur(&grid, 3, 3).unwrap();
//! assert_eq!(blurred[(0, 0)], ColorSample::new(255, 226, 226));
//! assert_eq!(blurred[(1, 0)], ColorSample::new(255, 212, 212));
//! assert_eq!(blurred[(1, 1)], ColorSample::new(255, 191, 191));
//! ```

pub mod color;
pub mod error;
pub mod grid;
pub mod kernel;

mod blur_impl;

// Re-export primary types and functions at crate root.
pub use blur_impl::{blur, blur_rgb};
pub use color::ColorSample;
pub use error::BlurError;
pub use grid::PixelGrid;
