use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::input::CameraCommand;
use crate::render::{Renderer, ScreenBuffer};
use crate::surface::{Hyperboloid, SurfaceFunction};

/// Everything one viewer session mutates: camera, surface and the screen
/// buffer the renderer writes into.
#[derive(Debug)]
pub struct RendererState<S = Hyperboloid> {
    camera: Camera,
    surface: S,
    renderer: Renderer,
    screen: ScreenBuffer,
    move_step: f64,
    turn_step: f64,
}

impl RendererState<Hyperboloid> {
    /// Creates a session from `config` with the camera at the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn from_config(config: &ViewerConfig) -> Result<Self> {
        Self::with_surface(config, config.surface()?, Camera::default())
    }
}

impl<S> RendererState<S>
where
    S: SurfaceFunction + Sync,
{
    /// Creates a session rendering `surface` from `camera`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn with_surface(config: &ViewerConfig, surface: S, camera: Camera) -> Result<Self> {
        config.validate()?;
        let renderer = Renderer::new(config.render)?;
        Ok(Self {
            camera,
            surface,
            renderer,
            screen: ScreenBuffer::new(config.render.height, config.render.width),
            move_step: config.move_step,
            turn_step: config.turn_step,
        })
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Returns the last rendered frame.
    #[must_use]
    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    /// Renders the current camera view into the screen buffer.
    pub fn render_frame(&mut self) -> &ScreenBuffer {
        if self.renderer.config().parallel {
            self.renderer
                .render_parallel_into(&self.camera, &self.surface, &mut self.screen);
        } else {
            self.renderer
                .render_into(&self.camera, &self.surface, &mut self.screen);
        }
        &self.screen
    }

    /// Applies a camera command. Returns `false` when the viewer should exit.
    pub fn apply(&mut self, command: CameraCommand) -> bool {
        command.apply(&mut self.camera, self.move_step, self.turn_step)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::render::RenderConfig;

    fn small_config() -> ViewerConfig {
        ViewerConfig {
            render: RenderConfig::new(12, 12, 10.0).unwrap(),
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn from_config_starts_at_origin() {
        let state = RendererState::from_config(&small_config()).unwrap();
        assert_eq!(*state.camera(), Camera::default());
        assert_eq!(state.screen().height(), 12);
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut state = RendererState::from_config(&small_config()).unwrap();
        state.apply(CameraCommand::Move(-Vector3::x() * 9.0));
        let first = state.render_frame().clone();
        let second = state.render_frame().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn commands_move_the_camera() {
        let mut state = RendererState::from_config(&small_config()).unwrap();
        assert!(state.apply(CameraCommand::Move(Vector3::z())));
        assert!(state.apply(CameraCommand::Turn {
            yaw: 2.0,
            pitch: 0.0
        }));
        assert_eq!(*state.camera().position(), Point3::new(0.0, 0.0, 1.0));
        assert!((state.camera().yaw() - std::f64::consts::PI / 8.0).abs() < 1e-12);
        assert!(!state.apply(CameraCommand::Quit));
    }

    #[test]
    fn parallel_state_matches_sequential_state() {
        let mut config = small_config();
        let mut seq = RendererState::from_config(&config).unwrap();
        config.render.parallel = true;
        let mut par = RendererState::from_config(&config).unwrap();
        for state in [&mut seq, &mut par] {
            state.apply(CameraCommand::Move(Vector3::new(-15.0, 2.0, 1.0)));
            state.apply(CameraCommand::Turn {
                yaw: 1.0,
                pitch: -1.0,
            });
        }
        assert_eq!(seq.render_frame(), par.render_frame());
    }

    #[test]
    fn custom_surface() {
        let plane = |_x: f64, _y: f64, z: f64| z + 1.0;
        let mut state =
            RendererState::with_surface(&small_config(), plane, Camera::default()).unwrap();
        // Bottom half of the grid looks down through z = -1.
        let screen = state.render_frame();
        assert_eq!(screen.get(0, 0), Some(crate::render::Cell::Empty));
        assert!(screen.hit_count() > 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ViewerConfig {
            move_step: 0.0,
            ..ViewerConfig::default()
        };
        assert!(RendererState::from_config(&config).is_err());
    }
}
