#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use luma_image as image;

#[doc(inline)]
pub use luma_imgproc as imgproc;
