//! Graylab - gray-level reduction and edge study for sample photographs.
//!
//! Fetches a sample photograph (or takes a local one), derives RGB and
//! grayscale views, reduces the grayscale image to a series of gray-level
//! counts, runs Canny edge detection, and assembles everything into a
//! labeled contact sheet. This library exposes modules for integration
//! testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
