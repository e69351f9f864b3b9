/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the length of the pixel data does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images do not share the same shape.
    #[error("Image shapes do not match ({0}x{1} vs {2}x{3})")]
    ShapeMismatch(usize, usize, usize, usize),

    /// Error when the pixel data cannot be cast to the requested type.
    #[error("Failed to cast pixel data to {0}")]
    CastError(String),
}
