//! Image quality and similarity metrics.
//!
//! This module provides functions for quantitatively comparing images,
//! useful for:
//!
//! - Evaluating image processing algorithms
//! - Measuring reconstruction quality
//! - Image compression evaluation
//!
//! # Available Metrics
//!
//! - **MSE** (Mean Squared Error): Average squared difference between pixels
//! - **PSNR** (Peak Signal-to-Noise Ratio): Quality metric in dB scale
//! - **SSIM** (Structural Similarity): Single-window whole-image variant
//! - **NPCC** (Pearson Correlation): Normalized correlation of intensities
//!
//! All metrics expect both operands to share the same shape and the pairwise
//! comparison [`compare`] bundles the four of them into one record.

mod compare;
mod mse;
mod npcc;
mod ssim;

pub use compare::{compare, ImageComparison};
pub use mse::{mse, psnr};
pub use npcc::npcc;
pub use ssim::ssim;
