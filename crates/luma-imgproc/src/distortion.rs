use luma_image::{Image, ImageError, PixelType};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

// strength of the quadratic radial term
const DISTORTION_COEFF: f32 = 0.3;

/// Apply a radial barrel distortion around the image center.
///
/// For each output pixel the offset from the integer center `(W / 2, H / 2)`
/// is scaled by `1 + 0.3 * r^2`, where `r` is the offset's radius normalized
/// by the center-to-corner distance, and the resulting coordinates are
/// truncated to integers to pick a source pixel (inverse mapping: every
/// destination pixel pulls from a computed source location). Destination
/// pixels whose source falls outside the image keep their zero fill, with no
/// clamping and no wraparound, which produces the characteristic dark
/// border of the effect.
///
/// The exact center pixel always maps to itself since the factor scales a
/// zero offset. A degenerate 1x1 input, whose normalization radius is zero,
/// is treated the same way.
///
/// Rows of the output are computed in parallel; every output pixel depends
/// only on the read-only input.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// A newly allocated distorted image with the same shape as the input.
///
/// # Example
///
/// ```
/// use luma_image::{Image, ImageSize};
/// use luma_imgproc::distortion::barrel_distortion;
///
/// let image = Image::<f32, 1>::from_size_val(
///     ImageSize {
///         width: 5,
///         height: 5,
///     },
///     1.0f32,
/// )
/// .unwrap();
///
/// let distorted = barrel_distortion(&image).unwrap();
///
/// assert_eq!(distorted.size(), image.size());
/// // the center pixel maps to itself
/// assert_eq!(distorted.get([2, 2, 0]), Some(&1.0f32));
/// ```
pub fn barrel_distortion<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: PixelType,
{
    let (rows, cols) = (src.rows(), src.cols());
    let mut dst = Image::from_size_val(src.size(), T::default())?;

    let (cx, cy) = ((cols / 2) as i64, (rows / 2) as i64);
    let max_radius = ((cx * cx + cy * cy) as f32).sqrt();

    let src_slice = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let dy = y as i64 - cy;
            for x in 0..cols {
                let dx = x as i64 - cx;
                let radius = if max_radius > 0.0 {
                    ((dx * dx + dy * dy) as f32).sqrt() / max_radius
                } else {
                    0.0
                };
                let factor = 1.0 + DISTORTION_COEFF * radius * radius;

                // truncate toward zero, as the source location of this pixel
                let src_x = (cx as f32 + dx as f32 * factor) as i64;
                let src_y = (cy as f32 + dy as f32 * factor) as i64;

                if src_x >= 0 && src_x < cols as i64 && src_y >= 0 && src_y < rows as i64 {
                    let src_idx = (src_y as usize * cols + src_x as usize) * C;
                    dst_row[x * C..x * C + C]
                        .copy_from_slice(&src_slice[src_idx..src_idx + C]);
                }
            }
        });

    Ok(dst)
}
