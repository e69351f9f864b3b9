use crate::{Image, ImageError, PixelType};

/// Cast the pixel data of an image to a different type and scale it.
///
/// The usual use is converting raw `u8` intensities into normalized
/// floating point intensities in `[0, 1]` with a scale of `1 / 255`.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image.
/// * `scale` - The scale to multiply the pixel data with.
///
/// Example:
///
/// ```
/// use luma_image::{Image, ImageSize};
/// use luma_image::ops::cast_and_scale;
///
/// let image = Image::<u8, 1>::new(
///  ImageSize {
///   width: 2,
///  height: 1,
/// },
/// vec![0u8, 255],
/// ).unwrap();
///
/// let mut image_f32 = Image::from_size_val(image.size(), 0.0f32).unwrap();
///
/// cast_and_scale(&image, &mut image_f32, 1. / 255.0).unwrap();
///
/// assert_eq!(image_f32.get([0, 0, 0]), Some(&0.0f32));
/// assert_eq!(image_f32.get([0, 1, 0]), Some(&1.0f32));
/// ```
pub fn cast_and_scale<T, U, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<U, C>,
    scale: U,
) -> Result<(), ImageError>
where
    T: PixelType + num_traits::NumCast,
    U: PixelType + num_traits::NumCast + std::ops::Mul<U, Output = U>,
{
    if src.size() != dst.size() {
        return Err(ImageError::ShapeMismatch(
            src.height(),
            src.width(),
            dst.height(),
            dst.width(),
        ));
    }

    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice().iter())
        .try_for_each(|(out, &inp)| {
            let x = U::from(inp).ok_or(ImageError::CastError(
                std::any::type_name::<U>().to_string(),
            ))?;
            *out = x * scale;
            Ok::<(), ImageError>(())
        })?;

    Ok(())
}
