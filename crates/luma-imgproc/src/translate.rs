use luma_image::{Image, ImageError, PixelType};

/// Shift the content of an image right and down by a number of pixels.
///
/// The destination cells starting at `(dy, dx)` receive the source content;
/// the vacated top rows and left columns are filled with the default (zero)
/// value. There is no wraparound: content shifted past the right or bottom
/// border is dropped, and shifts at or beyond an axis extent produce an
/// all-zero image.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dx` - The shift to the right in pixels.
/// * `dy` - The shift downwards in pixels.
///
/// # Returns
///
/// A newly allocated shifted image with the same shape as the input.
///
/// # Example
///
/// ```
/// use luma_image::{Image, ImageSize};
/// use luma_imgproc::translate::shift;
///
/// let image = Image::<f32, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![1.0f32, 2.0, 3.0, 4.0],
/// )
/// .unwrap();
///
/// let shifted = shift(&image, 1, 1).unwrap();
///
/// assert_eq!(shifted.as_slice(), &[0.0, 0.0, 0.0, 1.0]);
/// ```
pub fn shift<T, const C: usize>(
    src: &Image<T, C>,
    dx: usize,
    dy: usize,
) -> Result<Image<T, C>, ImageError>
where
    T: PixelType,
{
    let mut dst = Image::from_size_val(src.size(), T::default())?;

    let (rows, cols) = (src.rows(), src.cols());
    if dx >= cols || dy >= rows {
        return Ok(dst);
    }

    let src_slice = src.as_slice();
    let dst_slice = dst.as_slice_mut();
    let row_len = (cols - dx) * C;

    for y in dy..rows {
        let src_off = (y - dy) * cols * C;
        let dst_off = (y * cols + dx) * C;
        dst_slice[dst_off..dst_off + row_len]
            .copy_from_slice(&src_slice[src_off..src_off + row_len]);
    }

    Ok(dst)
}
