use luma_image::{Image, ImageError};

// stabilizing constants tuned for intensities normalized to [0, 1]
const C1: f32 = 0.01 * 0.01;
const C2: f32 = 0.03 * 0.03;

/// Compute a simplified structural similarity index (SSIM) between two images.
///
/// This is a whole-image variant of SSIM: the means, variances and covariance
/// are computed over a single global window covering the full image instead
/// of the sliding local windows of the canonical formulation. The statistics
/// are combined as:
///
/// $ SSIM = \frac{(2 \mu_1 \mu_2 + C_1)(2 \sigma_{12} + C_2)}{(\mu_1^2 + \mu_2^2 + C_1)(\sigma_1^2 + \sigma_2^2 + C_2)} $
///
/// with `C1 = 0.01^2` and `C2 = 0.03^2`, assuming intensities normalized to
/// `[0, 1]`.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
///
/// # Returns
///
/// The structural similarity score, `1.0` for identical images.
///
/// # Example
///
/// ```
/// use luma_image::{Image, ImageSize};
/// use luma_imgproc::metrics::ssim;
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
/// let ssim = ssim(&image, &image).unwrap();
/// assert_eq!(ssim, 1.0);
/// ```
pub fn ssim<const C: usize>(
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

    let n = image1.numel() as f32;

    let mu1 = image1.as_slice().iter().sum::<f32>() / n;
    let mu2 = image2.as_slice().iter().sum::<f32>() / n;

    // population variances and covariance over the single global window
    let (mut sigma1_sq, mut sigma2_sq, mut sigma12) = (0f32, 0f32, 0f32);
    image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .for_each(|(&a, &b)| {
            let (da, db) = (a - mu1, b - mu2);
            sigma1_sq += da * da;
            sigma2_sq += db * db;
            sigma12 += da * db;
        });
    sigma1_sq /= n;
    sigma2_sq /= n;
    sigma12 /= n;

    let num = (2.0 * mu1 * mu2 + C1) * (2.0 * sigma12 + C2);
    let den = (mu1 * mu1 + mu2 * mu2 + C1) * (sigma1_sq + sigma2_sq + C2);

    Ok(num / den)
}
