use super::CameraIntrinsic;
use crate::interpolation::grid::meshgrid_from_fn;
use lenswarp_image::ImageSize;
use lenswarp_tensor::{Tensor2, TensorError};

/// Represents the polynomial distortion parameters of a camera
///
/// The coefficients follow the layout of a five element distortion vector
/// `(k1, k2, p1, p2, k3)` with three radial and two tangential terms.
///
/// # Fields
///
/// * `k1` - The first radial distortion coefficient
/// * `k2` - The second radial distortion coefficient
/// * `k3` - The third radial distortion coefficient
/// * `p1` - The first tangential distortion coefficient
/// * `p2` - The second tangential distortion coefficient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolynomialDistortion {
    /// The first radial distortion coefficient
    pub k1: f64,
    /// The second radial distortion coefficient
    pub k2: f64,
    /// The third radial distortion coefficient
    pub k3: f64,
    /// The first tangential distortion coefficient
    pub p1: f64,
    /// The second tangential distortion coefficient
    pub p2: f64,
}

impl PolynomialDistortion {
    /// Create distortion parameters with all coefficients set to zero (no distortion).
    pub fn none() -> Self {
        Self {
            k1: 0.0,
            k2: 0.0,
            k3: 0.0,
            p1: 0.0,
            p2: 0.0,
        }
    }

    /// Create distortion parameters with only the radial coefficients.
    pub fn radial(k1: f64, k2: f64, k3: f64) -> Self {
        Self {
            k1,
            k2,
            k3,
            p1: 0.0,
            p2: 0.0,
        }
    }

    /// Create distortion parameters with radial and tangential coefficients.
    pub fn radial_tangential(k1: f64, k2: f64, k3: f64, p1: f64, p2: f64) -> Self {
        Self { k1, k2, k3, p1, p2 }
    }

    /// Return the parameters with every coefficient multiplied by -1.
    ///
    /// Distorting with the negated coefficients approximately undoes the
    /// forward distortion. This is not an algebraic inverse of the radial
    /// polynomial, so a round trip does not reproduce the input exactly.
    pub fn negated(&self) -> Self {
        Self {
            k1: -self.k1,
            k2: -self.k2,
            k3: -self.k3,
            p1: -self.p1,
            p2: -self.p2,
        }
    }
}

/// Distort a point using polynomial distortion
///
/// The point is pulled towards or pushed away from the principal point by
/// the radial gain evaluated at its normalized radius. The blend happens
/// directly in pixel space, so the focal lengths only enter through the
/// normalization. The tangential coefficients are stored in the model but
/// do not contribute to the output.
///
/// # Arguments
///
/// * `x` - The x coordinate of the point
/// * `y` - The y coordinate of the point
/// * `intrinsic` - The intrinsic parameters of the camera
/// * `distortion` - The distortion parameters of the camera
///
/// # Returns
///
/// * `x` - The x coordinate of the distorted point
/// * `y` - The y coordinate of the distorted point
pub fn distort_point_polynomial(
    x: f64,
    y: f64,
    intrinsic: &CameraIntrinsic,
    distortion: &PolynomialDistortion,
) -> (f64, f64) {
    // unpack the intrinsic and distortion parameters
    let (fx, fy, cx, cy) = (intrinsic.fx, intrinsic.fy, intrinsic.cx, intrinsic.cy);
    let (k1, k2, k3) = (distortion.k1, distortion.k2, distortion.k3);

    // normalize the coordinates
    let xn = (x - cx) / fx;
    let yn = (y - cy) / fy;

    // calculate the radial distance
    let r2 = xn * xn + yn * yn;

    // radial gain
    let kc = 1.0 + k1 * r2 + k2 * r2 * r2 + k3 * r2 * r2 * r2;

    // scale the pixel coordinate about the principal point
    let xdst = cx * (1.0 - kc) + x * kc;
    let ydst = cy * (1.0 - kc) + y * kc;

    (xdst, ydst)
}

/// Generate the remap grids for a polynomial distortion model
///
/// Every cell of the returned grids holds the distorted source coordinate
/// for its own destination pixel, ready to feed into
/// [`crate::interpolation::remap`].
///
/// # Arguments
///
/// * `intrinsic` - The intrinsic parameters of the camera
/// * `distortion` - The distortion parameters of the camera
/// * `size` - The size of the image
///
/// # Returns
///
/// * `map_x` - The x map for distorting the image
/// * `map_y` - The y map for distorting the image
pub fn generate_distortion_map_polynomial(
    intrinsic: &CameraIntrinsic,
    distortion: &PolynomialDistortion,
    size: &ImageSize,
) -> Result<(Tensor2<f32>, Tensor2<f32>), TensorError> {
    let (dst_rows, dst_cols) = (size.height, size.width);
    let (map_x, map_y) = meshgrid_from_fn(dst_cols, dst_rows, |x, y| {
        let (xdst, ydst) = distort_point_polynomial(x as f64, y as f64, intrinsic, distortion);
        Ok((xdst as f32, ydst as f32))
    })?;

    Ok((map_x, map_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lenswarp_image::ImageSize;

    fn reference_intrinsic() -> CameraIntrinsic {
        CameraIntrinsic {
            fx: 1738.06409,
            fy: 1736.96128,
            cx: 320.0,
            cy: 240.0,
        }
    }

    #[test]
    fn distort_point_principal_point_is_fixed() {
        let intrinsic = reference_intrinsic();
        let distortion = PolynomialDistortion::radial(0.2, 0.0, 0.0);

        let (x, y) = distort_point_polynomial(320.0, 240.0, &intrinsic, &distortion);

        assert_relative_eq!(x, 320.0);
        assert_relative_eq!(y, 240.0);
    }

    #[test]
    fn distort_point_zero_coefficients_is_identity() {
        let intrinsic = reference_intrinsic();
        let distortion = PolynomialDistortion::none();

        for &(px, py) in &[(0.0, 0.0), (17.5, 123.25), (639.0, 479.0)] {
            let (x, y) = distort_point_polynomial(px, py, &intrinsic, &distortion);
            assert_relative_eq!(x, px);
            assert_relative_eq!(y, py);
        }
    }

    #[test]
    fn distort_point_radial_expansion() {
        let intrinsic = CameraIntrinsic {
            fx: 100.0,
            fy: 100.0,
            cx: 50.0,
            cy: 50.0,
        };
        let distortion = PolynomialDistortion::radial(0.1, 0.0, 0.0);

        // r2 = ((60 - 50) / 100)^2 = 0.01 so kc = 1 + 0.1 * 0.01 = 1.001
        let (x, y) = distort_point_polynomial(60.0, 50.0, &intrinsic, &distortion);

        assert_relative_eq!(x, 60.01, max_relative = 1e-12);
        assert_relative_eq!(y, 50.0, max_relative = 1e-12);
    }

    #[test]
    fn distort_point_gain_grows_with_radius() {
        let intrinsic = CameraIntrinsic {
            fx: 100.0,
            fy: 100.0,
            cx: 50.0,
            cy: 50.0,
        };
        let distortion = PolynomialDistortion::radial(0.1, 0.0, 0.0);

        // along the horizontal axis through the principal point, the relative
        // displacement away from the center grows strictly with the radius
        let mut last_gain = 0.0;
        for &px in &[55.0, 60.0, 70.0, 90.0, 130.0] {
            let (x, _) = distort_point_polynomial(px, 50.0, &intrinsic, &distortion);
            let gain = (x - 50.0).abs() / (px - 50.0).abs();
            assert!(gain > last_gain);
            last_gain = gain;
        }
    }

    #[test]
    fn distort_point_negation_round_trip_is_approximate() {
        let intrinsic = reference_intrinsic();
        let distortion = PolynomialDistortion::radial(0.2, 0.0, 0.0);

        let (xd, yd) = distort_point_polynomial(10.0, 20.0, &intrinsic, &distortion);
        let (xr, yr) = distort_point_polynomial(xd, yd, &intrinsic, &distortion.negated());

        // the negated pass is only an approximation of the inverse
        let err = ((xr - 10.0).powi(2) + (yr - 20.0).powi(2)).sqrt();
        assert!(err > 0.0);
        assert!(err < 0.5);
    }

    #[test]
    fn negated_flips_every_coefficient() {
        let distortion = PolynomialDistortion::radial_tangential(0.2, -0.05, 0.001, 0.01, -0.02);
        let negated = distortion.negated();

        assert_eq!(negated.k1, -0.2);
        assert_eq!(negated.k2, 0.05);
        assert_eq!(negated.k3, -0.001);
        assert_eq!(negated.p1, -0.01);
        assert_eq!(negated.p2, 0.02);
    }

    #[test]
    fn tangential_coefficients_do_not_move_points() {
        let intrinsic = reference_intrinsic();
        let radial_only = PolynomialDistortion::radial(0.2, 0.0, 0.0);
        let with_tangential = PolynomialDistortion::radial_tangential(0.2, 0.0, 0.0, 0.5, -0.5);

        let (x0, y0) = distort_point_polynomial(100.0, 75.0, &intrinsic, &radial_only);
        let (x1, y1) = distort_point_polynomial(100.0, 75.0, &intrinsic, &with_tangential);

        assert_eq!(x0, x1);
        assert_eq!(y0, y1);
    }

    #[test]
    fn generate_map_covers_every_pixel() -> Result<(), TensorError> {
        let intrinsic = reference_intrinsic();
        let distortion = PolynomialDistortion::radial(0.2, 0.0, 0.0);

        let size = ImageSize {
            width: 8,
            height: 4,
        };

        let (map_x, map_y) = generate_distortion_map_polynomial(&intrinsic, &distortion, &size)?;

        assert_eq!(map_x.shape, [4, 8]);
        assert_eq!(map_y.shape, [4, 8]);

        // each cell must hold the distorted coordinate of its own pixel index
        for y in 0..size.height {
            for x in 0..size.width {
                let (xd, yd) =
                    distort_point_polynomial(x as f64, y as f64, &intrinsic, &distortion);
                assert_relative_eq!(*map_x.get([y, x]).unwrap(), xd as f32);
                assert_relative_eq!(*map_y.get([y, x]).unwrap(), yd as f32);
            }
        }

        Ok(())
    }

    #[test]
    fn generate_map_zero_size() -> Result<(), TensorError> {
        let intrinsic = reference_intrinsic();
        let distortion = PolynomialDistortion::none();

        let size = ImageSize {
            width: 0,
            height: 0,
        };

        let (map_x, map_y) = generate_distortion_map_polynomial(&intrinsic, &distortion, &size)?;

        assert_eq!(map_x.numel(), 0);
        assert_eq!(map_y.numel(), 0);

        Ok(())
    }
}
