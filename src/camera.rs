use std::f64::consts::FRAC_PI_2;
use std::fmt;

use crate::math::{Point3, Vector3};

/// Orthonormal viewing frame derived from a camera's yaw and pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Viewing direction.
    pub forward: Vector3,
    /// Screen-vertical direction (increasing row index).
    pub vertical: Vector3,
    /// Screen-horizontal direction (increasing column index). Always has a
    /// zero Z component.
    pub horizontal: Vector3,
}

/// A free-flying camera with yaw and pitch, no roll.
///
/// Angles are in radians and accumulate without wraparound. The basis is
/// never stored; [`Camera::basis`] recomputes it from the angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Point3,
    yaw: f64,
    pitch: f64,
}

impl Camera {
    /// Creates a camera at `position` looking along the given angles.
    #[must_use]
    pub fn new(position: Point3, yaw: f64, pitch: f64) -> Self {
        Self {
            position,
            yaw,
            pitch,
        }
    }

    /// Returns the eye position.
    #[must_use]
    pub fn position(&self) -> &Point3 {
        &self.position
    }

    /// Returns the horizontal angle.
    #[must_use]
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Returns the vertical angle.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Adds to both angles.
    pub fn rotate(&mut self, d_yaw: f64, d_pitch: f64) {
        self.yaw += d_yaw;
        self.pitch += d_pitch;
    }

    /// Moves the eye by `delta`, expressed in world axes.
    pub fn translate(&mut self, delta: &Vector3) {
        self.position += delta;
    }

    /// Computes the viewing basis from the current angles.
    ///
    /// `vertical` is the forward direction pitched down by a quarter turn,
    /// `horizontal` the yaw turned right by a quarter turn in the XY plane.
    #[must_use]
    pub fn basis(&self) -> CameraBasis {
        CameraBasis {
            forward: direction(self.yaw, self.pitch),
            vertical: direction(self.yaw, self.pitch - FRAC_PI_2),
            horizontal: direction(self.yaw - FRAC_PI_2, 0.0),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point3::origin(), 0.0, 0.0)
    }
}

/// Unit vector for a yaw/pitch pair.
fn direction(yaw: f64, pitch: f64) -> Vector3 {
    let (sy, cy) = yaw.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    Vector3::new(cy * cp, sy * cp, sp)
}

/// Diagnostic header shown above each frame.
impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let basis = self.basis();
        writeln!(
            f,
            "[ {}, {}, {} ] | yaw : {} | pitch : {}",
            self.position.x, self.position.y, self.position.z, self.yaw, self.pitch
        )?;
        write_vector(f, "forward   ", &basis.forward)?;
        write_vector(f, "vertical  ", &basis.vertical)?;
        write_vector(f, "horizontal", &basis.horizontal)
    }
}

fn write_vector(f: &mut fmt::Formatter<'_>, label: &str, v: &Vector3) -> fmt::Result {
    writeln!(f, "{label} : [ {:.4}, {:.4}, {:.4} ]", v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_4, PI};

    fn angle_sweep() -> impl Iterator<Item = (f64, f64)> {
        (-8..=8).flat_map(|i| {
            (-8..=8).map(move |j| (f64::from(i) * PI / 7.0, f64::from(j) * PI / 9.0))
        })
    }

    #[test]
    fn identity_basis() {
        let b = Camera::default().basis();
        assert_abs_diff_eq!(b.forward, Vector3::x(), epsilon = 1e-12);
        assert_abs_diff_eq!(b.vertical, -Vector3::z(), epsilon = 1e-12);
        assert_abs_diff_eq!(b.horizontal, -Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn basis_vectors_are_unit_length() {
        for (yaw, pitch) in angle_sweep() {
            let b = Camera::new(Point3::origin(), yaw, pitch).basis();
            assert_abs_diff_eq!(b.forward.norm(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(b.vertical.norm(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(b.horizontal.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn horizontal_is_level_and_orthogonal() {
        for (yaw, pitch) in angle_sweep() {
            let b = Camera::new(Point3::origin(), yaw, pitch).basis();
            assert_abs_diff_eq!(b.horizontal.z, 0.0);
            assert_abs_diff_eq!(b.horizontal.dot(&b.forward), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(b.horizontal.dot(&b.vertical), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(b.vertical.dot(&b.forward), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn looking_straight_up() {
        let b = Camera::new(Point3::origin(), 0.0, FRAC_PI_2).basis();
        assert_abs_diff_eq!(b.forward, Vector3::z(), epsilon = 1e-12);
        assert_abs_diff_eq!(b.vertical, Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn rotate_accumulates_without_wrapping() {
        let mut cam = Camera::default();
        for _ in 0..40 {
            cam.rotate(FRAC_PI_4, -FRAC_PI_4);
        }
        assert_abs_diff_eq!(cam.yaw(), 10.0 * PI, epsilon = 1e-9);
        assert_abs_diff_eq!(cam.pitch(), -10.0 * PI, epsilon = 1e-9);
        assert_abs_diff_eq!(cam.basis().forward, Vector3::x(), epsilon = 1e-9);
    }

    #[test]
    fn translate_uses_world_axes() {
        let mut cam = Camera::new(Point3::origin(), FRAC_PI_2, 0.3);
        cam.translate(&Vector3::new(1.0, 0.0, 0.0));
        cam.translate(&Vector3::new(0.0, -1.0, 2.0));
        assert_eq!(*cam.position(), Point3::new(1.0, -1.0, 2.0));
    }

    #[test]
    fn header_lists_state_and_basis() {
        let text = Camera::new(Point3::new(1.0, 2.0, 3.0), 0.5, -0.25).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "[ 1, 2, 3 ] | yaw : 0.5 | pitch : -0.25");
        assert!(lines[1].starts_with("forward"));
        assert!(lines[2].starts_with("vertical"));
        assert!(lines[3].starts_with("horizontal"));
    }
}
