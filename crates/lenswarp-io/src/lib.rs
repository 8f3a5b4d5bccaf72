#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, encoding/decoding failures,
/// and format-specific errors.
pub mod error;

/// High-level image reading functions.
///
/// Provides reading with automatic format detection for the supported
/// pixel layouts. See [`functional::read_image_any`].
pub mod functional;

/// PNG image encoding and decoding.
///
/// Read and write 8-bit grayscale and RGB PNG images.
pub mod png;

/// JPEG image encoding and decoding.
///
/// Pure Rust JPEG codec for reading and writing JPEG images.
pub mod jpeg;

pub use crate::error::IoError;
