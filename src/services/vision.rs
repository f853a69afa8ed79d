//! Edge detection collaborator.
//!
//! A single call into `imageproc`'s Canny implementation. Thresholds
//! apply to the gradient magnitude; the low one admits weak edges
//! connected to strong ones, the high one seeds strong edges.

use image::GrayImage;

/// Run Canny edge detection. Output pixels are 255 on edges, 0 elsewhere.
pub fn detect_edges(gray: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    imageproc::edges::canny(gray, low_threshold, high_threshold)
}
