#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// radial barrel distortion module.
pub mod distortion;

/// image flipping module.
pub mod flip;

/// image similarity metrics module.
pub mod metrics;

/// image rotation module.
pub mod rotate;

/// horizontal stretching module.
pub mod stretch;

/// aggregate geometric transformations module.
pub mod transform;

/// image translation module.
pub mod translate;
