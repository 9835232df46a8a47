use crate::error::ConfigError;
use crate::math::Point3;

use super::SurfaceFunction;

/// Hyperboloid of one sheet around the Z axis.
///
/// `f(x, y, z) = x^2 + y^2 - z^2 - r^2`
///
/// The waist is a circle of radius `r` in the `z = 0` plane. Points between
/// the sheet and the axis evaluate negative, points outside positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperboloid {
    radius: f64,
}

impl Hyperboloid {
    /// Creates a new hyperboloid.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not finite and positive.
    pub fn new(radius: f64) -> Result<Self, ConfigError> {
        let radius = ConfigError::require_positive("surface radius", radius)?;
        Ok(Self { radius })
    }

    /// Returns the waist radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Hyperboloid {
    fn default() -> Self {
        Self { radius: 3.0 }
    }
}

impl SurfaceFunction for Hyperboloid {
    fn evaluate(&self, point: &Point3) -> f64 {
        point.x * point.x + point.y * point.y - point.z * point.z - self.radius * self.radius
    }
}
