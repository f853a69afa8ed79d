//! gray-levels: Uniform gray-level quantization for 8-bit grayscale images
//!
//! This library reduces the number of distinct intensity values in an
//! 8-bit grayscale image by uniform integer-bucket quantization: the 256
//! possible intensities are grouped into contiguous buckets and every
//! sample is replaced by the lowest member of its bucket.
//!
//! # Quick Start
//!
//! The [`LevelReducer`] builder is the primary entry point:
//!
//! ```
//! use gray_levels::{GrayMap, LevelReducer};
//!
//! let image = GrayMap::from_raw(vec![0, 63, 200, 255], 2, 2).unwrap();
//! let reducer = LevelReducer::new(4).unwrap();
//!
//! let reduced = reducer.reduce(&image);
//! assert_eq!(reduced.pixels(), &[0, 0, 192, 192]);
//! ```
//!
//! # Bucket Math
//!
//! For a requested level count `L` (clamped to 256), the bucket width is
//! `factor = 256 / L` (integer division) and every sample `v` maps to
//! `(v / factor) * factor`. Two consequences worth knowing:
//!
//! - `L = 256` gives `factor = 1`: the identity transform.
//! - `L = 1` gives `factor = 256`: every sample lands in the single
//!   bucket whose floor is 0, so the output is all-zero.
//!
//! Because of integer truncation the output can contain *fewer* than `L`
//! distinct values, but never more, and every output value is a multiple
//! of `factor` no larger than the input sample it replaced.
//!
//! # Errors
//!
//! A level count of zero is rejected with [`LevelError::ZeroLevels`];
//! counts above 256 are harmless and clamped. Constructing a [`GrayMap`]
//! whose buffer length disagrees with its dimensions is rejected with
//! [`LevelError::DimensionMismatch`].

pub mod graymap;
pub mod reduce;

#[cfg(test)]
mod domain_tests;

pub use graymap::GrayMap;
pub use reduce::{LevelError, LevelReducer};
