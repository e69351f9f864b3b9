use luma_image::{Image, ImageError, ImageSize, PixelType};

/// Rotate an image 90 degrees clockwise.
///
/// The output shape is the transpose of the input shape, so a `(H, W)` image
/// becomes a `(W, H)` image. The rotation is a bijection over pixel
/// positions and therefore lossless.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// A newly allocated rotated image with shape (W, H, C).
///
/// # Example
///
/// ```
/// use luma_image::{Image, ImageSize};
/// use luma_imgproc::rotate::rotate_90_cw;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 3,
///         height: 2,
///     },
///     vec![0u8, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let rotated = rotate_90_cw(&image).unwrap();
///
/// assert_eq!(rotated.size().width, 2);
/// assert_eq!(rotated.size().height, 3);
/// assert_eq!(rotated.as_slice(), &[3u8, 0, 4, 1, 5, 2]);
/// ```
pub fn rotate_90_cw<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: PixelType,
{
    let (rows, cols) = (src.rows(), src.cols());
    let mut dst = Image::from_size_val(
        ImageSize {
            width: rows,
            height: cols,
        },
        T::default(),
    )?;

    let src_slice = src.as_slice();
    let dst_slice = dst.as_slice_mut();

    // dst(y, x) pulls from src(rows - 1 - x, y)
    for y in 0..cols {
        for x in 0..rows {
            let src_idx = ((rows - 1 - x) * cols + y) * C;
            let dst_idx = (y * rows + x) * C;
            dst_slice[dst_idx..dst_idx + C].copy_from_slice(&src_slice[src_idx..src_idx + C]);
        }
    }

    Ok(dst)
}
