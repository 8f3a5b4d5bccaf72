use rayon::prelude::*;

use lenswarp_image::Image;
use lenswarp_tensor::Tensor2;

/// Apply a function to each pixel for grid sampling in parallel.
///
/// The destination rows are zipped with the corresponding rows of the
/// coordinate maps and processed on the global thread pool. The function
/// receives the mapped x and y coordinate and the destination pixel slice.
pub fn par_iter_rows_resample<T, const C: usize>(
    dst: &mut Image<T, C>,
    map_x: &Tensor2<f32>,
    map_y: &Tensor2<f32>,
    f: impl Fn(&f32, &f32, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    // chunking by rows requires a non-zero row length
    if dst.as_slice().is_empty() {
        return;
    }

    let cols = dst.cols();
    let dst_slice = dst.as_slice_mut();
    let map_x_slice = map_x.as_slice();
    let map_y_slice = map_y.as_slice();

    dst_slice
        .par_chunks_exact_mut(C * cols)
        .zip(map_x_slice.par_chunks_exact(cols))
        .zip(map_y_slice.par_chunks_exact(cols))
        .for_each(|((dst_chunk, map_x_chunk), map_y_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x_chunk.iter().zip(map_y_chunk.iter()))
                .for_each(|(dst_pixel, (x, y))| {
                    f(x, y, dst_pixel);
                });
        });
}
