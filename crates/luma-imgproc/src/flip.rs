use luma_image::{Image, ImageError, PixelType};
use rayon::{iter::ParallelIterator, slice::ParallelSliceMut};

/// Flip the input image horizontally.
///
/// Mirrors the image about its vertical axis: output column `x` equals input
/// column `width - 1 - x`. The operation is involutive, so applying it twice
/// returns the original image.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// A newly allocated mirrored image with the same shape as the input.
///
/// # Example
///
/// ```
/// use luma_image::{Image, ImageSize};
/// use luma_imgproc::flip::horizontal_flip;
///
/// let image = Image::<f32, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0f32; 2 * 3],
/// )
/// .unwrap();
///
/// let flipped: Image<f32, 1> = horizontal_flip(&image).unwrap();
///
/// assert_eq!(flipped.size().width, 2);
/// assert_eq!(flipped.size().height, 3);
/// ```
pub fn horizontal_flip<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: PixelType,
{
    let mut dst = src.clone();
    let cols = src.cols();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .for_each(|row| {
            let mut i = 0;
            let mut j = cols - 1;
            while i < j {
                for c in 0..C {
                    row.swap(i * C + c, j * C + c);
                }
                i += 1;
                j -= 1;
            }
        });

    Ok(dst)
}
