//! Aggregate application of the geometric transforms.
//!
//! The five transforms are mutually independent: each one reads only the
//! original input and writes its own freshly allocated output, so they may
//! run in any order.

use luma_image::{Image, ImageError, PixelType};

use crate::{distortion, flip, rotate, stretch, translate};

/// Default shift in pixels applied by [`apply_transforms`].
pub const DEFAULT_SHIFT: usize = 10;

/// Default horizontal stretch factor applied by [`apply_transforms`].
pub const DEFAULT_STRETCH_FACTOR: f32 = 1.5;

/// The set of images produced by [`apply_transforms`].
///
/// Each field is a freshly allocated image; none aliases the input storage.
#[derive(Clone)]
pub struct TransformSet<T, const C: usize>
where
    T: PixelType,
{
    /// Content shifted right and down with zero fill.
    pub translated: Image<T, C>,
    /// Rotated 90 degrees clockwise, shape transposed.
    pub rotated: Image<T, C>,
    /// Width scaled by the stretch factor, nearest-neighbor.
    pub stretched: Image<T, C>,
    /// Flipped about the vertical axis.
    pub mirrored: Image<T, C>,
    /// Radially distorted around the image center.
    pub distorted: Image<T, C>,
}

/// Apply the full set of geometric transformations to an image.
///
/// Runs [`translate::shift`] (by [`DEFAULT_SHIFT`] pixels on both axes),
/// [`rotate::rotate_90_cw`], [`stretch::stretch_horizontal`] (by
/// [`DEFAULT_STRETCH_FACTOR`]), [`flip::horizontal_flip`] and
/// [`distortion::barrel_distortion`] on the same read-only input and
/// collects the five results.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The [`TransformSet`] holding one output image per transform.
///
/// # Example
///
/// ```
/// use luma_image::{Image, ImageSize};
/// use luma_imgproc::transform::apply_transforms;
///
/// let image = Image::<f32, 1>::from_size_val(
///     ImageSize {
///         width: 20,
///         height: 30,
///     },
///     0.5f32,
/// )
/// .unwrap();
///
/// let set = apply_transforms(&image).unwrap();
///
/// assert_eq!(set.translated.size(), image.size());
/// assert_eq!(set.rotated.size().width, 30);
/// assert_eq!(set.stretched.size().width, 30);
/// assert_eq!(set.mirrored.size(), image.size());
/// assert_eq!(set.distorted.size(), image.size());
/// ```
pub fn apply_transforms<T, const C: usize>(
    src: &Image<T, C>,
) -> Result<TransformSet<T, C>, ImageError>
where
    T: PixelType,
{
    Ok(TransformSet {
        translated: translate::shift(src, DEFAULT_SHIFT, DEFAULT_SHIFT)?,
        rotated: rotate::rotate_90_cw(src)?,
        stretched: stretch::stretch_horizontal(src, DEFAULT_STRETCH_FACTOR)?,
        mirrored: flip::horizontal_flip(src)?,
        distorted: distortion::barrel_distortion(src)?,
    })
}
