use rayon::prelude::*;

use lenswarp_tensor::{Tensor2, TensorError};

/// Create a meshgrid of x and y coordinates from a function of the pixel index
///
/// The grid rows are filled in parallel. Each cell is computed independently
/// from its own `(x, y)` index, so the order of evaluation is unspecified.
///
/// # Arguments
///
/// * `cols` - The number of columns indicating the width of the grid
/// * `rows` - The number of rows indicating the height of the grid
/// * `f` - The function evaluated at every `(x, y)` pixel index
///
/// # Returns
///
/// A tuple of 2D tensors of shape (rows, cols) containing the x and y coordinates
pub fn meshgrid_from_fn<F>(
    cols: usize,
    rows: usize,
    f: F,
) -> Result<(Tensor2<f32>, Tensor2<f32>), TensorError>
where
    F: Fn(usize, usize) -> Result<(f32, f32), TensorError> + Send + Sync,
{
    // a zero sized grid has no cells to fill
    if cols == 0 || rows == 0 {
        return Ok((
            Tensor2::from_shape_vec([rows, cols], vec![])?,
            Tensor2::from_shape_vec([rows, cols], vec![])?,
        ));
    }

    let mut map_x = vec![0f32; rows * cols];
    let mut map_y = vec![0f32; rows * cols];

    map_x
        .par_chunks_exact_mut(cols)
        .zip(map_y.par_chunks_exact_mut(cols))
        .enumerate()
        .try_for_each(|(y, (row_x, row_y))| {
            for (x, (cell_x, cell_y)) in row_x.iter_mut().zip(row_y.iter_mut()).enumerate() {
                let (xv, yv) = f(x, y)?;
                *cell_x = xv;
                *cell_y = yv;
            }
            Ok(())
        })?;

    let map_x = Tensor2::from_shape_vec([rows, cols], map_x)?;
    let map_y = Tensor2::from_shape_vec([rows, cols], map_y)?;

    Ok((map_x, map_y))
}

#[cfg(test)]
mod tests {
    use super::meshgrid_from_fn;
    use lenswarp_tensor::TensorError;

    #[test]
    fn meshgrid_identity() -> Result<(), TensorError> {
        let (map_x, map_y) = meshgrid_from_fn(3, 2, |x, y| Ok((x as f32, y as f32)))?;

        assert_eq!(map_x.shape, [2, 3]);
        assert_eq!(map_y.shape, [2, 3]);

        assert_eq!(map_x.as_slice(), &[0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
        assert_eq!(map_y.as_slice(), &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);

        Ok(())
    }

    #[test]
    fn meshgrid_empty() -> Result<(), TensorError> {
        let (map_x, map_y) = meshgrid_from_fn(0, 4, |x, y| Ok((x as f32, y as f32)))?;

        assert_eq!(map_x.numel(), 0);
        assert_eq!(map_y.numel(), 0);

        Ok(())
    }
}
