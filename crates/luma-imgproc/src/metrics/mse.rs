use luma_image::{Image, ImageError};

/// Compute the mean squared error (MSE) between two images.
///
/// The MSE is defined as:
///
/// $ MSE = \frac{1}{n} \sum_{i=1}^{n} (I_1 - I_2)^2 $
///
/// where `I_1` and `I_2` are the two images and `n` is the number of pixels.
///
/// The result is always non-negative and equals zero iff the two images are
/// identical.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
///
/// # Returns
///
/// The mean squared error between the two images.
///
/// # Example
///
/// ```
/// use luma_image::{Image, ImageSize};
/// use luma_imgproc::metrics::mse;
///
/// let image1 = Image::<f32, 1>::new(
///    ImageSize {
///      width: 2,
///      height: 3,
///    },
///    vec![0f32, 1f32, 2f32, 3f32, 4f32, 5f32],
/// )
/// .unwrap();
///
/// let image2 = Image::<f32, 1>::new(
///    ImageSize {
///      width: 2,
///      height: 3,
///    },
///    vec![0f32, 1f32, 2f32, 3f32, 4f32, 5f32],
/// )
/// .unwrap();
///
/// let mse = mse(&image1, &image2).unwrap();
/// assert_eq!(mse, 0f32);
/// ```
pub fn mse<const C: usize>(
    image1: &Image<f32, C>,
    image2: &Image<f32, C>,
) -> Result<f32, ImageError> {
    if image1.size() != image2.size() {
        return Err(ImageError::ShapeMismatch(
            image1.height(),
            image1.width(),
            image2.height(),
            image2.width(),
        ));
    }

    let mse = image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .fold(0f32, |acc, (&a, &b)| acc + (a - b) * (a - b));

    Ok(mse / (image1.numel() as f32))
}

/// Compute the peak signal-to-noise ratio (PSNR) between two images.
///
/// The PSNR is defined as:
///
/// $ PSNR = 20 \log_{10} \left( \frac{MAX}{\sqrt{MSE}} \right) $
///
/// where `MAX` is the maximum possible pixel value and `MSE` is the mean
/// squared error. For intensities normalized to `[0, 1]` use a `max_value`
/// of `1.0`.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
/// * `max_value` - The maximum possible pixel value.
///
/// # Returns
///
/// The peak signal-to-noise ratio between the two images, in decibels (dB).
/// Identical images have a MSE of zero, for which the PSNR is defined as
/// positive infinity.
///
/// # Example
/// ```
/// use luma_image::{Image, ImageSize};
/// use luma_imgproc::metrics::psnr;
///
/// let image1 = Image::<f32, 1>::new(
///   ImageSize {
///     width: 2,
///     height: 2,
///   },
///   vec![0.0f32, 0.5, 0.5, 1.0],
/// )
/// .unwrap();
///
/// let image2 = Image::<f32, 1>::new(
///   ImageSize {
///     width: 2,
///     height: 2,
///   },
///   vec![0.5f32, 1.0, 0.0, 0.5],
/// )
/// .unwrap();
///
/// let psnr = psnr(&image1, &image2, 1.0).unwrap();
///
/// assert!((psnr - 6.0206).abs() < 1e-3);
/// ```
///
/// # Note
///
/// The PSNR is used to measure the quality of a reconstructed image. The
/// higher the PSNR, the better the quality of the reconstructed image.
/// Underneath, the PSNR is based on the mean squared error [mse].
pub fn psnr<const C: usize>(
    image1: &Image<f32, C>,
    image2: &Image<f32, C>,
    max_value: f32,
) -> Result<f32, ImageError> {
    let mse = mse(image1, image2)?;

    // zero error must map to +inf instead of reaching the logarithm
    if mse == 0f32 {
        return Ok(f32::INFINITY);
    }

    Ok(20f32 * (max_value / mse.sqrt()).log10())
}

#[cfg(test)]
mod tests {
    use luma_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_equal() -> Result<(), ImageError> {
        let image1 = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0f32, 1f32, 2f32, 3f32, 4f32, 5f32],
        )?;
        let image2 = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0f32, 1f32, 2f32, 3f32, 4f32, 5f32],
        )?;
        let mse = crate::metrics::mse(&image1, &image2)?;
        assert_eq!(mse, 0f32);

        Ok(())
    }

    #[test]
    fn test_not_equal() -> Result<(), ImageError> {
        let image1 = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0f32, 1f32, 2f32, 3f32],
        )?;
        let image2 = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0f32, 3f32, 2f32, 3f32],
        )?;
        let mse = crate::metrics::mse(&image1, &image2)?;
        assert_eq!(mse, 1.0);

        Ok(())
    }

    #[test]
    fn test_symmetric() -> Result<(), ImageError> {
        let image1 = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.1f32, 0.7, 0.2, 0.9],
        )?;
        let image2 = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.5f32, 0.3, 0.8, 0.4],
        )?;
        assert_eq!(
            crate::metrics::mse(&image1, &image2)?,
            crate::metrics::mse(&image2, &image1)?
        );

        Ok(())
    }

    #[test]
    fn test_shape_mismatch() -> Result<(), ImageError> {
        let image1 = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0f32; 4],
        )?;
        let image2 = Image::<f32, 1>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![0f32; 6],
        )?;
        let res = crate::metrics::mse(&image1, &image2);
        assert!(matches!(res, Err(ImageError::ShapeMismatch(2, 2, 2, 3))));

        Ok(())
    }

    #[test]
    fn test_psnr_identical() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0f32, 0.25, 0.5, 1.0],
        )?;
        let psnr = crate::metrics::psnr(&image, &image, 1.0)?;
        assert_eq!(psnr, f32::INFINITY);

        Ok(())
    }

    #[test]
    fn test_psnr() -> Result<(), ImageError> {
        // a constant half-intensity error gives mse = 0.25 and psnr ~ 6.02 dB
        let image1 = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0f32, 0.5, 0.5, 1.0],
        )?;
        let image2 = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.5f32, 1.0, 0.0, 0.5],
        )?;
        let psnr = crate::metrics::psnr(&image1, &image2, 1.0)?;
        assert!((psnr - 6.0206).abs() < 1e-3);

        Ok(())
    }
}
