use luma_image::{Image, ImageError, ImageSize, PixelType};

/// Stretch an image horizontally by a scale factor.
///
/// The output width is `floor(width * factor)` and the height is unchanged.
/// Each output column pulls from the source column `floor(x / factor)`,
/// clamped to the last input column. This is nearest-neighbor resampling
/// along a single dimension, with no interpolation or anti-aliasing.
///
/// The factor is expected to be positive; a factor small enough to produce
/// a zero output width yields an empty image.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `factor` - The horizontal scale factor.
///
/// # Returns
///
/// A newly allocated image with shape (H, floor(W * factor), C).
///
/// # Example
///
/// ```
/// use luma_image::{Image, ImageSize};
/// use luma_imgproc::stretch::stretch_horizontal;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![7u8, 9],
/// )
/// .unwrap();
///
/// let stretched = stretch_horizontal(&image, 1.5).unwrap();
///
/// assert_eq!(stretched.size().width, 3);
/// assert_eq!(stretched.as_slice(), &[7u8, 7, 9]);
/// ```
pub fn stretch_horizontal<T, const C: usize>(
    src: &Image<T, C>,
    factor: f32,
) -> Result<Image<T, C>, ImageError>
where
    T: PixelType,
{
    let (rows, cols) = (src.rows(), src.cols());
    let new_cols = (cols as f32 * factor) as usize;

    let mut dst = Image::from_size_val(
        ImageSize {
            width: new_cols,
            height: rows,
        },
        T::default(),
    )?;

    // one shared source column per output column, clamped to the last one
    let col_map: Vec<usize> = (0..new_cols)
        .map(|x| ((x as f32 / factor) as usize).min(cols - 1))
        .collect();

    let src_slice = src.as_slice();
    let dst_slice = dst.as_slice_mut();

    for y in 0..rows {
        let src_row = &src_slice[y * cols * C..(y + 1) * cols * C];
        let dst_row = &mut dst_slice[y * new_cols * C..(y + 1) * new_cols * C];
        for (x, &src_x) in col_map.iter().enumerate() {
            dst_row[x * C..x * C + C].copy_from_slice(&src_row[src_x * C..src_x * C + C]);
        }
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use luma_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_stretch_shape() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 3,
            },
            0.5f32,
        )?;
        let stretched = super::stretch_horizontal(&image, 1.5)?;
        assert_eq!(stretched.size().height, 3);
        assert_eq!(stretched.size().width, 6);

        Ok(())
    }

    #[test]
    fn test_stretch_first_column_preserved() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![1u8, 2, 3, 4, 5, 6],
        )?;
        let stretched = super::stretch_horizontal(&image, 1.5)?;
        // floor(0 / 1.5) = 0, so column 0 comes straight from the input
        assert_eq!(stretched.get([0, 0, 0]), Some(&1u8));
        assert_eq!(stretched.get([1, 0, 0]), Some(&4u8));

        Ok(())
    }

    #[test]
    fn test_stretch_column_mapping() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![10u8, 20],
        )?;
        // output columns 0, 1, 2 pull from source columns 0, 0, 1
        let stretched = super::stretch_horizontal(&image, 1.5)?;
        assert_eq!(stretched.as_slice(), &[10u8, 10, 20]);

        Ok(())
    }

    #[test]
    fn test_stretch_shrink() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![1u8, 2, 3, 4],
        )?;
        let shrunk = super::stretch_horizontal(&image, 0.5)?;
        assert_eq!(shrunk.size().width, 2);
        assert_eq!(shrunk.as_slice(), &[1u8, 3]);

        Ok(())
    }
}
