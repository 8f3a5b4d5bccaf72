use thiserror::Error;

use lenswarp_image::{Image, ImageError, ImageSize};
use lenswarp_tensor::TensorError;

use crate::calibration::distortion::{generate_distortion_map_polynomial, PolynomialDistortion};
use crate::calibration::CameraIntrinsic;
use crate::interpolation::{remap, BorderType, InterpolationMode};

/// An error type for the distortion simulation pipeline.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// The image has a channel count the pipeline does not support.
    #[error("Unsupported number of channels ({0}), expected 1 or 3")]
    UnsupportedChannels(usize),

    /// The focal lengths of the pinhole model must be strictly positive.
    #[error("Focal lengths must be positive, got fx={0}, fy={1}")]
    InvalidFocalLength(f64, f64),

    /// Error when building the coordinate maps.
    #[error(transparent)]
    TensorError(#[from] TensorError),

    /// Error from the image container or the resampler.
    #[error(transparent)]
    ImageError(#[from] ImageError),
}

/// Strategy used to derive the approximate inverse pass of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InverseStrategy {
    /// Distort again with every coefficient negated.
    ///
    /// Negation is not an algebraic inverse of the radial polynomial, so the
    /// restored image only approximates the input. An iterative solver could
    /// be added as another strategy without changing the pipeline interface.
    #[default]
    NegatedCoefficients,
}

/// Configuration of the distortion simulation pipeline.
///
/// Bundles the camera model, the forward distortion, the resampling options
/// and the strategy used for the second pass, so the pipeline itself carries
/// no built-in constants.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// The pinhole intrinsics of the simulated camera.
    pub intrinsic: CameraIntrinsic,
    /// The distortion applied in the forward pass.
    pub distortion: PolynomialDistortion,
    /// The interpolation used when resampling through the maps.
    pub interpolation: InterpolationMode,
    /// How samples outside the source image are filled.
    pub border: BorderType,
    /// The strategy used to derive the second, approximately inverse pass.
    pub inverse_strategy: InverseStrategy,
}

impl SimulationConfig {
    /// Create a configuration from a camera model.
    ///
    /// Resampling defaults to bilinear interpolation with a constant zero
    /// border and the default inverse strategy.
    pub fn new(intrinsic: CameraIntrinsic, distortion: PolynomialDistortion) -> Self {
        Self {
            intrinsic,
            distortion,
            interpolation: InterpolationMode::Bilinear,
            border: BorderType::Constant,
            inverse_strategy: InverseStrategy::default(),
        }
    }

    /// Create the reference configuration for an image of the given size.
    ///
    /// Uses the reference focal lengths, centers the principal point on the
    /// image and applies a mild positive radial distortion.
    pub fn for_size(size: ImageSize) -> Self {
        Self::new(
            CameraIntrinsic::new(
                1738.06409,
                1736.96128,
                size.width as f64 / 2.0,
                size.height as f64 / 2.0,
            ),
            PolynomialDistortion::radial(0.2, 0.0, 0.0),
        )
    }
}

/// Simulate lens distortion on an image and approximately undo it again.
///
/// The pipeline builds a remap grid from the camera model, resamples the
/// source through it to produce the distorted image, then repeats the
/// process on the distorted image with the inverse strategy applied to the
/// coefficients to produce the restored image. Samples that leave the image
/// bounds are filled according to the configured border, zero by default.
/// The restored image approximates the source but does not reproduce it
/// exactly.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, C).
/// * `distorted` - The output image for the forward pass, same shape as `src`.
/// * `restored` - The output image for the inverse pass, same shape as `src`.
/// * `config` - The camera model and coefficients driving both passes.
///
/// # Errors
///
/// If the channel count is not 1 or 3, the focal lengths are not positive,
/// or the output images do not match the source size, an error is returned.
///
/// # Example
///
/// ```
/// use lenswarp_image::{Image, ImageSize};
/// use lenswarp_imgproc::simulation::{simulate_distortion, SimulationConfig};
///
/// let size = ImageSize {
///     width: 4,
///     height: 4,
/// };
/// let src = Image::<u8, 1>::from_size_val(size, 128).unwrap();
/// let mut distorted = Image::<u8, 1>::from_size_val(size, 0).unwrap();
/// let mut restored = Image::<u8, 1>::from_size_val(size, 0).unwrap();
///
/// let config = SimulationConfig::for_size(size);
/// simulate_distortion(&src, &mut distorted, &mut restored, &config).unwrap();
///
/// assert_eq!(distorted.size(), size);
/// assert_eq!(restored.size(), size);
/// ```
pub fn simulate_distortion<const C: usize>(
    src: &Image<u8, C>,
    distorted: &mut Image<u8, C>,
    restored: &mut Image<u8, C>,
    config: &SimulationConfig,
) -> Result<(), SimulationError> {
    if C != 1 && C != 3 {
        return Err(SimulationError::UnsupportedChannels(C));
    }

    if config.intrinsic.fx <= 0.0 || config.intrinsic.fy <= 0.0 {
        return Err(SimulationError::InvalidFocalLength(
            config.intrinsic.fx,
            config.intrinsic.fy,
        ));
    }

    if src.size() != distorted.size() {
        return Err(ImageError::InvalidImageSize(
            src.rows(),
            src.cols(),
            distorted.rows(),
            distorted.cols(),
        )
        .into());
    }

    if src.size() != restored.size() {
        return Err(ImageError::InvalidImageSize(
            src.rows(),
            src.cols(),
            restored.rows(),
            restored.cols(),
        )
        .into());
    }

    let size = src.size();

    // forward pass
    let (map_x, map_y) =
        generate_distortion_map_polynomial(&config.intrinsic, &config.distortion, &size)?;
    remap(
        src,
        distorted,
        &map_x,
        &map_y,
        config.interpolation,
        config.border,
    )?;

    // second pass, the maps are rebuilt from scratch with the inverted model
    let inverse = match config.inverse_strategy {
        InverseStrategy::NegatedCoefficients => config.distortion.negated(),
    };
    let (map_x, map_y) = generate_distortion_map_polynomial(&config.intrinsic, &inverse, &size)?;
    remap(
        distorted,
        restored,
        &map_x,
        &map_y,
        config.interpolation,
        config.border,
    )?;

    Ok(())
}
