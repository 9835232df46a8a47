use std::f64::consts::PI;

use crate::error::ConfigError;
use crate::render::RenderConfig;
use crate::surface::Hyperboloid;

/// Everything the interactive viewer can be tuned with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    /// Grid, ray and solver parameters.
    pub render: RenderConfig,
    /// Waist radius of the rendered hyperboloid.
    pub surface_radius: f64,
    /// World units moved per movement key.
    pub move_step: f64,
    /// Radians turned per arrow key.
    pub turn_step: f64,
}

impl ViewerConfig {
    /// Checks every field.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.render.validate()?;
        ConfigError::require_positive("surface radius", self.surface_radius)?;
        ConfigError::require_positive("move step", self.move_step)?;
        ConfigError::require_positive("turn step", self.turn_step)?;
        Ok(())
    }

    /// Builds the configured surface.
    ///
    /// # Errors
    ///
    /// Returns an error if `surface_radius` is invalid.
    pub fn surface(&self) -> Result<Hyperboloid, ConfigError> {
        Hyperboloid::new(self.surface_radius)
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            surface_radius: 3.0,
            move_step: 1.0,
            turn_step: PI / 16.0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn defaults_are_valid() {
        let config = ViewerConfig::default();
        config.validate().unwrap();
        assert_eq!(config.render.height, 50);
        assert_eq!(config.render.width, 50);
        assert_abs_diff_eq!(config.render.forward_scale, 10.0);
        assert_abs_diff_eq!(config.surface().unwrap().radius(), 3.0);
    }

    #[test]
    fn rejects_bad_radius_and_steps() {
        let config = ViewerConfig {
            surface_radius: 0.0,
            ..ViewerConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(config.surface().is_err());

        let config = ViewerConfig {
            turn_step: f64::INFINITY,
            ..ViewerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { .. })
        ));
    }

    #[test]
    fn rejects_bad_render_config() {
        let mut config = ViewerConfig::default();
        config.render.width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroDimension { .. })
        ));
    }
}
