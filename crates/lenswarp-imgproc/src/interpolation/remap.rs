use crate::parallel;

use super::interpolate::interpolate_pixel;
use super::{BorderType, InterpolationMode};
use lenswarp_image::{Image, ImageDtype, ImageError};
use lenswarp_tensor::Tensor2;

/// Apply generic geometric transformation to an image.
///
/// For every destination pixel the source image is sampled at the coordinate
/// stored in `map_x` and `map_y`. Samples that fall entirely outside the
/// source bounds follow the border policy: with [`BorderType::Constant`] the
/// destination pixel is filled with the default value (zero), with
/// [`BorderType::Replicate`] the nearest border pixel is used.
///
/// # Arguments
///
/// * `src` - The input image container with shape (height, width, C).
/// * `dst` - The output image container with shape (height, width, C).
/// * `map_x` - The x coordinates of the pixels to interpolate.
/// * `map_y` - The y coordinates of the pixels to interpolate.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - The border handling mode for out-of-bounds samples.
///
/// # Errors
///
/// * The mapx and mapy must have the same size.
/// * The output image must have the same size as the mapx and mapy.
pub fn remap<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    map_x: &Tensor2<f32>,
    map_y: &Tensor2<f32>,
    interpolation: InterpolationMode,
    border: BorderType,
) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    if map_x.shape != map_y.shape {
        return Err(ImageError::InvalidImageSize(
            map_x.shape[0],
            map_x.shape[1],
            map_y.shape[0],
            map_y.shape[1],
        ));
    }

    if dst.shape[0..2] != map_x.shape {
        return Err(ImageError::InvalidImageSize(
            map_x.shape[0],
            map_x.shape[1],
            dst.shape[0],
            dst.shape[1],
        ));
    }

    if dst.as_slice().is_empty() {
        return Ok(());
    }

    // sampling needs at least one source pixel
    if src.as_slice().is_empty() {
        return Err(ImageError::InvalidImageSize(
            src.shape[0],
            src.shape[1],
            dst.shape[0],
            dst.shape[1],
        ));
    }

    let max_x = (src.cols() - 1) as f32;
    let max_y = (src.rows() - 1) as f32;

    // parallelize the remap operation by rows
    parallel::par_iter_rows_resample(dst, map_x, map_y, |&x, &y, dst_pixel| {
        // a sample is out of bounds when its coordinate leaves the source
        // extent entirely, fractional coordinates up to the last pixel are
        // interpolated with their clamped neighbors
        if border == BorderType::Constant && (x < 0.0 || x > max_x || y < 0.0 || y > max_y) {
            dst_pixel.fill(T::default());
            return;
        }

        // replicate clamps into the source extent so the kernels never see
        // a negative fraction
        let (x, y) = (x.clamp(0.0, max_x), y.clamp(0.0, max_y));

        let pixel = interpolate_pixel(src, x, y, interpolation);
        dst_pixel
            .iter_mut()
            .zip(pixel.iter())
            .for_each(|(dst, &p)| {
                *dst = T::from_f32(p);
            });
    });

    Ok(())
}
