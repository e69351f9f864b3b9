use luma_image::{Image, ImageError};

/// Compute the normalized Pearson correlation coefficient (NPCC) between two images.
///
/// Both images are mean-centered and the coefficient is computed as:
///
/// $ NPCC = \frac{\sum \hat{I_1} \hat{I_2}}{\sqrt{\sum \hat{I_1}^2 \sum \hat{I_2}^2}} $
///
/// where `\hat{I}` denotes the mean-centered image. The result lies in
/// `[-1, 1]`, with `1.0` for perfectly correlated images.
///
/// If either image is constant-valued its variance is zero and the
/// denominator vanishes; that case yields `0.0` instead of a division error.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
///
/// # Returns
///
/// The correlation coefficient between the two images.
///
/// # Example
///
/// ```
/// use luma_image::{Image, ImageSize};
/// use luma_imgproc::metrics::npcc;
///
/// let image1 = Image::<f32, 1>::new(
///   ImageSize {
///     width: 2,
///     height: 2,
///   },
///   vec![0.0f32, 0.25, 0.5, 1.0],
/// )
/// .unwrap();
///
/// let image2 = Image::<f32, 1>::new(
///   ImageSize {
///     width: 2,
///     height: 2,
///   },
///   vec![1.0f32, 0.75, 0.5, 0.0],
/// )
/// .unwrap();
///
/// let npcc = npcc(&image1, &image2).unwrap();
/// assert!(npcc < 0.0);
/// ```
pub fn npcc<const C: usize>(
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

    let (mut numerator, mut sum1_sq, mut sum2_sq) = (0f32, 0f32, 0f32);
    image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .for_each(|(&a, &b)| {
            let (da, db) = (a - mu1, b - mu2);
            numerator += da * db;
            sum1_sq += da * da;
            sum2_sq += db * db;
        });

    let denominator = (sum1_sq * sum2_sq).sqrt();

    if denominator == 0f32 {
        return Ok(0f32);
    }

    Ok(numerator / denominator)
}
