//! Interactive terminal ray caster for implicit surfaces.
//!
//! Every character cell casts a ray from the camera, Brent's method finds
//! where the ray crosses the zero set of a [`SurfaceFunction`], and the cell
//! is marked hit when the residual there is small.

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod ray;
pub mod render;
pub mod state;
pub mod surface;
pub mod terminal;

pub use camera::{Camera, CameraBasis};
pub use config::ViewerConfig;
pub use error::{ConfigError, IsocastError, Result};
pub use input::CameraCommand;
pub use ray::Ray;
pub use render::{Cell, RenderConfig, Renderer, ScreenBuffer};
pub use state::RendererState;
pub use surface::{Hyperboloid, SurfaceFunction};
