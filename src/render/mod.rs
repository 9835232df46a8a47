pub mod screen;

pub use screen::{Cell, ScreenBuffer};

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::camera::{Camera, CameraBasis};
use crate::error::ConfigError;
use crate::math::root::{FindRoot, RootEstimate, SolverSettings};
use crate::math::Point3;
use crate::ray::Ray;
use crate::surface::SurfaceFunction;

/// Screen geometry and classification parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Number of character rows.
    pub height: usize,
    /// Number of character columns.
    pub width: usize,
    /// Length of the forward component of every pixel ray. Lateral offsets
    /// are one unit per cell, so a smaller value widens the field of view.
    pub forward_scale: f64,
    /// A cell is a hit when `|g(t*)|` is below this.
    pub hit_tolerance: f64,
    /// Root search along each ray.
    pub solver: SolverSettings,
    /// Render rows on the rayon thread pool.
    pub parallel: bool,
}

impl RenderConfig {
    /// Creates a config with the given grid and forward scale and default
    /// tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or `forward_scale` is not
    /// finite and positive.
    pub fn new(height: usize, width: usize, forward_scale: f64) -> Result<Self, ConfigError> {
        let config = Self {
            height,
            width,
            forward_scale,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every field.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::ZeroDimension {
                height: self.height,
                width: self.width,
            });
        }
        ConfigError::require_positive("forward scale", self.forward_scale)?;
        ConfigError::require_positive("hit tolerance", self.hit_tolerance)?;
        self.solver.validate()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            height: 50,
            width: 50,
            forward_scale: 10.0,
            hit_tolerance: 0.1,
            solver: SolverSettings::default(),
            parallel: false,
        }
    }
}

/// Casts one ray per cell and classifies it against an implicit surface.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    config: RenderConfig,
    solver: FindRoot,
}

impl Renderer {
    /// Creates a renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new(config: RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            solver: FindRoot::new(config.solver),
        })
    }

    /// Returns the render configuration.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Builds the ray through cell `(row, col)`.
    ///
    /// `direction = k * forward + vertical * (row - H/2) + horizontal * (col - W/2)`
    /// with integer halving of the grid size.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ray_for_pixel(&self, origin: &Point3, basis: &CameraBasis, row: usize, col: usize) -> Ray {
        let dv = row as f64 - (self.config.height / 2) as f64;
        let dh = col as f64 - (self.config.width / 2) as f64;
        let direction =
            basis.forward * self.config.forward_scale + basis.vertical * dv + basis.horizontal * dh;
        Ray::new(*origin, direction)
    }

    /// Solves for the surface crossing along `ray`.
    pub fn solve<S>(&self, surface: &S, ray: &Ray) -> RootEstimate
    where
        S: SurfaceFunction + ?Sized,
    {
        self.solver.execute(|t| ray.residual(surface, t))
    }

    /// Classifies a single ray. NaN residuals count as empty.
    pub fn shade<S>(&self, surface: &S, ray: &Ray) -> Cell
    where
        S: SurfaceFunction + ?Sized,
    {
        let est = self.solve(surface, ray);
        if !est.converged {
            trace!(
                t = est.t,
                residual = est.residual,
                bracketed = est.bracketed,
                "root search hit iteration cap"
            );
        }
        if est.residual.abs() < self.config.hit_tolerance {
            Cell::Hit
        } else {
            Cell::Empty
        }
    }

    /// Renders a fresh buffer.
    pub fn render<S>(&self, camera: &Camera, surface: &S) -> ScreenBuffer
    where
        S: SurfaceFunction + Sync + ?Sized,
    {
        let mut screen = ScreenBuffer::new(self.config.height, self.config.width);
        if self.config.parallel {
            self.render_parallel_into(camera, surface, &mut screen);
        } else {
            self.render_into(camera, surface, &mut screen);
        }
        screen
    }

    /// Renders every cell into `screen` on the calling thread.
    ///
    /// A buffer of the wrong size is replaced.
    pub fn render_into<S>(&self, camera: &Camera, surface: &S, screen: &mut ScreenBuffer)
    where
        S: SurfaceFunction + ?Sized,
    {
        self.fit(screen);
        let basis = camera.basis();
        for (row, cells) in screen.rows_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let ray = self.ray_for_pixel(camera.position(), &basis, row, col);
                *cell = self.shade(surface, &ray);
            }
        }
        debug!(
            height = screen.height(),
            width = screen.width(),
            hits = screen.hit_count(),
            "frame rendered"
        );
    }

    /// Same output as [`Renderer::render_into`], one rayon task per row.
    pub fn render_parallel_into<S>(&self, camera: &Camera, surface: &S, screen: &mut ScreenBuffer)
    where
        S: SurfaceFunction + Sync + ?Sized,
    {
        self.fit(screen);
        let basis = camera.basis();
        let origin = *camera.position();
        let width = self.config.width;
        screen
            .cells_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, cells)| {
                for (col, cell) in cells.iter_mut().enumerate() {
                    let ray = self.ray_for_pixel(&origin, &basis, row, col);
                    *cell = self.shade(surface, &ray);
                }
            });
        debug!(
            height = screen.height(),
            width = screen.width(),
            hits = screen.hit_count(),
            "frame rendered in parallel"
        );
    }

    fn fit(&self, screen: &mut ScreenBuffer) {
        if screen.height() != self.config.height || screen.width() != self.config.width {
            *screen = ScreenBuffer::new(self.config.height, self.config.width);
        }
    }
}
