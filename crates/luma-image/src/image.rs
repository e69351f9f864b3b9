use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use luma_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for types that can back an image buffer.
///
/// Send and Sync are required so rows can be processed in parallel.
pub trait PixelType: Copy + Default + Send + Sync + 'static {}

impl PixelType for u8 {}
impl PixelType for u16 {}
impl PixelType for u32 {}
impl PixelType for i8 {}
impl PixelType for i16 {}
impl PixelType for i32 {}
impl PixelType for f32 {}
impl PixelType for f64 {}

/// Represents an image with pixel data.
///
/// The pixel data is stored as a contiguous row-major buffer with shape
/// (H, W, C), where H is the height, W the width and C the number of
/// channels of the image.
#[derive(Clone)]
pub struct Image<T, const CHANNELS: usize>
where
    T: PixelType,
{
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS>
where
    T: PixelType,
{
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use luma_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 1>::new(
    ///    ImageSize {
    ///       width: 10,
    ///      height: 20,
    ///  },
    /// vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 1);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The default value of the pixel data.
    ///
    /// # Returns
    ///
    /// A new image with the given size and default pixel data.
    ///
    /// # Examples
    ///
    /// ```
    /// use luma_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 1>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///    height: 20,
    /// }, 0.0f32).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError> {
        let data = vec![val; size.width * size.height * CHANNELS];
        let image = Image::new(size, data)?;

        Ok(image)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the total number of elements in the pixel buffer.
    pub fn numel(&self) -> usize {
        self.size.width * self.size.height * CHANNELS
    }

    /// Get a reference to the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Get a mutable reference to the pixel data as a flat slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    /// Get the pixel value at the given (row, col, channel) index.
    ///
    /// Returns `None` if the index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use luma_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 1>::new(
    ///   ImageSize {
    ///     width: 2,
    ///     height: 1,
    ///   },
    ///   vec![0.0f32, 1.0],
    /// ).unwrap();
    ///
    /// assert_eq!(image.get([0, 1, 0]), Some(&1.0f32));
    /// assert_eq!(image.get([1, 0, 0]), None);
    /// ```
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, c] = index;
        if y >= self.size.height || x >= self.size.width || c >= CHANNELS {
            return None;
        }
        self.data.get((y * self.size.width + x) * CHANNELS + c)
    }
}
