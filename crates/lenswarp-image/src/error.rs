use lenswarp_tensor::TensorError;

/// An error type for image operations.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image size is not valid.
    #[error("Invalid image size ({0}x{1}), expected ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the underlying tensor cannot be created.
    #[error("Error with the tensor storage")]
    TensorError(#[from] TensorError),
}
