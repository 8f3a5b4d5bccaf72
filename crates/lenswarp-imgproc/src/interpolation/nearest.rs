use lenswarp_image::{Image, ImageDtype};

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn nearest_neighbor_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = u.round() as usize;
    let iv = v.round() as usize;

    let iu = iu.min(cols - 1);
    let iv = iv.min(rows - 1);

    let base = (iv * cols + iu) * C;

    let mut pixel = [0.0; C];
    let src = unsafe { image.as_slice().get_unchecked(base..base + C) };
    for k in 0..C {
        pixel[k] = src[k].into();
    }

    pixel
}
