mod hyperboloid;

pub use hyperboloid::Hyperboloid;

use crate::math::Point3;

/// A scalar field whose zero set is the rendered surface.
///
/// Implementations must be pure: the same point always yields the same
/// residual. The renderer evaluates this many times per pixel.
pub trait SurfaceFunction {
    /// Evaluates the residual at `point`. Zero means on the surface.
    fn evaluate(&self, point: &Point3) -> f64;
}

impl<F> SurfaceFunction for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn evaluate(&self, point: &Point3) -> f64 {
        self(point.x, point.y, point.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn closure_acts_as_surface() {
        let plane = |_x: f64, _y: f64, z: f64| z - 2.0;
        assert_abs_diff_eq!(plane.evaluate(&Point3::new(7.0, -1.0, 2.0)), 0.0);
        assert_abs_diff_eq!(plane.evaluate(&Point3::new(0.0, 0.0, 5.0)), 3.0);
    }
}
