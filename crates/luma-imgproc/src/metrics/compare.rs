use luma_image::{Image, ImageError};
use serde::{Deserialize, Serialize};

use super::{mse, npcc, psnr, ssim};

/// The bundled result of comparing two images with all supported metrics.
///
/// Produced by [`compare`]; one record per comparison call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageComparison {
    /// Mean squared error, zero iff the images are identical.
    pub mse: f32,
    /// Peak signal-to-noise ratio in dB, positive infinity for identical images.
    pub psnr: f32,
    /// Simplified single-window structural similarity index.
    pub ssim: f32,
    /// Normalized Pearson correlation coefficient.
    pub npcc: f32,
}

/// Compare two normalized grayscale images using multiple similarity metrics.
///
/// Computes [`mse`], [`psnr`] (with a peak value of `1.0`), [`ssim`] and
/// [`npcc`] and bundles them into one [`ImageComparison`] record. The images
/// are expected to hold intensities normalized to `[0, 1]`.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
///
/// # Returns
///
/// The comparison record, or [`ImageError::ShapeMismatch`] if the two images
/// do not share the same dimensions. No metric is computed in that case.
///
/// # Example
///
/// ```
/// use luma_image::{Image, ImageSize};
/// use luma_imgproc::metrics::compare;
///
/// let image = Image::<f32, 1>::new(
///   ImageSize {
///     width: 2,
///     height: 2,
///   },
///   vec![0.0f32, 0.25, 0.5, 1.0],
/// )
/// .unwrap();
///
/// let result = compare(&image, &image).unwrap();
///
/// assert_eq!(result.mse, 0.0);
/// assert_eq!(result.psnr, f32::INFINITY);
/// ```
pub fn compare<const C: usize>(
    image1: &Image<f32, C>,
    image2: &Image<f32, C>,
) -> Result<ImageComparison, ImageError> {
    if image1.size() != image2.size() {
        return Err(ImageError::ShapeMismatch(
            image1.height(),
            image1.width(),
            image2.height(),
            image2.width(),
        ));
    }

    Ok(ImageComparison {
        mse: mse(image1, image2)?,
        psnr: psnr(image1, image2, 1.0)?,
        ssim: ssim(image1, image2)?,
        npcc: npcc(image1, image2)?,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use luma_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_compare_identical() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![0.0f32, 0.2, 0.4, 0.6, 0.8, 1.0],
        )?;

        let result = crate::metrics::compare(&image, &image)?;

        assert_eq!(result.mse, 0f32);
        assert_eq!(result.psnr, f32::INFINITY);
        assert_relative_eq!(result.ssim, 1.0, epsilon = 1e-6);
        assert_relative_eq!(result.npcc, 1.0, epsilon = 1e-6);

        Ok(())
    }

    #[test]
    fn test_compare_zero_images() -> Result<(), ImageError> {
        // degenerate-identical: zero error but also zero variance, so the
        // correlation reports 0 instead of 1
        let zeros = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0.0f32,
        )?;

        let result = crate::metrics::compare(&zeros, &zeros)?;

        assert_eq!(result.mse, 0f32);
        assert_eq!(result.psnr, f32::INFINITY);
        assert_eq!(result.npcc, 0f32);

        Ok(())
    }

    #[test]
    fn test_compare_shape_mismatch() -> Result<(), ImageError> {
        let image1 = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0f32,
        )?;
        let image2 = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 3,
            },
            0.0f32,
        )?;

        let res = crate::metrics::compare(&image1, &image2);
        assert!(matches!(res, Err(ImageError::ShapeMismatch(2, 2, 3, 2))));

        Ok(())
    }

    #[test]
    fn test_compare_serializes() -> Result<(), ImageError> {
        let image1 = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.0f32, 1.0],
        )?;
        let image2 = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![1.0f32, 0.0],
        )?;

        let result = crate::metrics::compare(&image1, &image2)?;
        let json = serde_json::to_string(&result).expect("serializable record");
        assert!(json.contains("\"mse\":1.0"));

        Ok(())
    }
}
