#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// tensor module containing the tensor and storage implementations
pub mod tensor;

pub use tensor::{Tensor, Tensor2, Tensor3, TensorError};
