#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use lenswarp_tensor as tensor;

#[doc(inline)]
pub use lenswarp_image as image;

#[doc(inline)]
pub use lenswarp_imgproc as imgproc;

#[doc(inline)]
pub use lenswarp_io as io;
