use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use lenswarp_image::{Image, ImageDtype};

/// Interpolation mode for the resample operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Border handling modes for samples that fall outside the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderType {
    /// Fill all out-of-bounds samples with the default pixel value (zero).
    /// Corresponds to OpenCV's `BORDER_CONSTANT`.
    Constant,

    /// Replicate the value of the nearest border pixel.
    /// Corresponds to OpenCV's `BORDER_REPLICATE`.
    Replicate,
}

/// Kernel for interpolating a pixel value
///
/// The source image must contain at least one pixel; callers such as
/// [`super::remap`] check this before sampling.
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel values as f32, one per channel.
pub fn interpolate_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
) -> [f32; C] {
    debug_assert!(!image.as_slice().is_empty(), "source image is empty");
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
    }
}
