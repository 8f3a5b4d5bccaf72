use thiserror::Error;

/// An error type for tensor operations.
#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    /// The shape of the tensor does not match the data length.
    #[error("Data length {actual} does not match the shape {expected}")]
    InvalidShape {
        /// The expected number of elements implied by the shape.
        expected: usize,
        /// The actual number of elements in the data.
        actual: usize,
    },
}

/// Compute the strides from the shape of a tensor.
///
/// # Arguments
///
/// * `shape` - The shape of the tensor.
///
/// # Returns
///
/// * `strides` - The strides of the tensor.
///
/// # Example
///
/// ```
/// use lenswarp_tensor::tensor::get_strides_from_shape;
///
/// let shape: [usize; 2] = [2, 3];
/// let strides = get_strides_from_shape(shape);
/// assert_eq!(strides, [3, 1]);
/// ```
pub fn get_strides_from_shape<const N: usize>(shape: [usize; N]) -> [usize; N] {
    let mut strides: [usize; N] = [0; N];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// A data structure to represent a multi-dimensional tensor.
///
/// The tensor owns its memory as a contiguous `Vec<T>` in row-major order,
/// and carries its shape and strides alongside the data.
///
/// # Attributes
///
/// * `shape` - The shape of the tensor.
/// * `strides` - The strides of the tensor data in memory.
///
/// # Example
///
/// ```
/// use lenswarp_tensor::{Tensor, TensorError};
///
/// let data: Vec<u8> = vec![1, 2, 3, 4];
/// let t = Tensor::<u8, 2>::from_shape_vec([2, 2], data)?;
/// assert_eq!(t.shape, [2, 2]);
/// # Ok::<(), TensorError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T, const N: usize> {
    data: Vec<T>,
    /// The shape of the tensor.
    pub shape: [usize; N],
    /// The strides of the tensor data in memory.
    pub strides: [usize; N],
}

/// A 2-dimensional tensor alias.
pub type Tensor2<T> = Tensor<T, 2>;

/// A 3-dimensional tensor alias.
pub type Tensor3<T> = Tensor<T, 3>;

impl<T, const N: usize> Tensor<T, N> {
    /// Create a new `Tensor` with the given shape and data.
    ///
    /// # Arguments
    ///
    /// * `shape` - An array containing the shape of the tensor.
    /// * `data` - A vector containing the data of the tensor.
    ///
    /// # Errors
    ///
    /// If the data length does not match the product of the shape, an error
    /// is returned.
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Result<Self, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != data.len() {
            return Err(TensorError::InvalidShape {
                expected: numel,
                actual: data.len(),
            });
        }
        let strides = get_strides_from_shape(shape);
        Ok(Self {
            data,
            shape,
            strides,
        })
    }

    /// Create a new `Tensor` filled with a single value.
    ///
    /// # Arguments
    ///
    /// * `shape` - An array containing the shape of the tensor.
    /// * `value` - The value to fill the tensor with.
    pub fn from_shape_val(shape: [usize; N], value: T) -> Self
    where
        T: Clone,
    {
        let numel = shape.iter().product::<usize>();
        let strides = get_strides_from_shape(shape);
        Self {
            data: vec![value; numel],
            shape,
            strides,
        }
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Get the data of the tensor as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Get the data of the tensor as a mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    /// Consumes the tensor and returns the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a reference to the element at the given index, or `None` if the
    /// index is out of bounds along any axis.
    ///
    /// # Arguments
    ///
    /// * `index` - An array containing the index per axis.
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        let mut offset = 0;
        for ((&idx, &dim), &stride) in index.iter().zip(self.shape.iter()).zip(self.strides.iter())
        {
            if idx >= dim {
                return None;
            }
            offset += idx * stride;
        }
        self.data.get(offset)
    }
}
