use crate::math::{Point3, Vector3};
use crate::surface::SurfaceFunction;

/// A half-line `origin + t * direction`.
///
/// `direction` is not normalized; its length scales the parameter `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
}

impl Ray {
    /// Creates a new ray.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Returns the ray origin.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the (unnormalized) direction.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Surface residual along the ray, `g(t) = f(origin + t * direction)`.
    pub fn residual<S>(&self, surface: &S, t: f64) -> f64
    where
        S: SurfaceFunction + ?Sized,
    {
        surface.evaluate(&self.at(t))
    }
}
