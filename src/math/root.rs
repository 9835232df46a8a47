use crate::error::ConfigError;

/// Search interval and stopping criteria for [`FindRoot`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    /// Lower end of the initial bracket.
    pub lower: f64,
    /// Upper end of the initial bracket.
    pub upper: f64,
    /// Iteration stops once the bracket is at most this wide.
    pub tolerance: f64,
    /// Hard cap on Brent iterations.
    pub max_iterations: usize,
}

impl SolverSettings {
    /// Creates validated solver settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the bracket is empty or non-finite, the tolerance
    /// is not positive, or `max_iterations` is zero.
    pub fn new(
        lower: f64,
        upper: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Result<Self, ConfigError> {
        let settings = Self {
            lower,
            upper,
            tolerance,
            max_iterations,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the invariants enforced by [`SolverSettings::new`].
    ///
    /// # Errors
    ///
    /// See [`SolverSettings::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.lower.is_finite() || !self.upper.is_finite() || self.lower >= self.upper {
            return Err(ConfigError::InvalidBracket {
                lower: self.lower,
                upper: self.upper,
            });
        }
        ConfigError::require_positive("solver tolerance", self.tolerance)?;
        if self.max_iterations == 0 {
            return Err(ConfigError::NonPositive {
                parameter: "max iterations",
                value: 0.0,
            });
        }
        Ok(())
    }
}

impl Default for SolverSettings {
    /// Rays look forward only, up to 100 world units.
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 100.0,
            tolerance: 0.001,
            max_iterations: 100,
        }
    }
}

/// Outcome of a root search.
///
/// A search always produces an estimate; `bracketed` and `converged` say how
/// much to trust it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootEstimate {
    /// Best estimate of the root.
    pub t: f64,
    /// Function value at `t`.
    pub residual: f64,
    /// Lower end of the final bracket.
    pub lower: f64,
    /// Upper end of the final bracket.
    pub upper: f64,
    /// Number of Brent iterations performed.
    pub iterations: usize,
    /// Whether the initial endpoints straddled a sign change. Diagnostic only.
    pub bracketed: bool,
    /// Whether a stopping criterion was met before the iteration cap.
    pub converged: bool,
}

/// Finds a root of a scalar function on a bracket with Brent's method.
///
/// The search runs even when the endpoints share a sign. Its first steps then
/// probe the interior, and a sign change found there becomes a real bracket.
/// This is how a ray that enters and leaves a surface still finds a crossing.
/// Without one the estimate is whatever iterate the search stopped on.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindRoot {
    settings: SolverSettings,
}

impl FindRoot {
    /// Creates a new root search.
    #[must_use]
    pub fn new(settings: SolverSettings) -> Self {
        Self { settings }
    }

    /// Runs the search on `f`.
    pub fn execute<F>(&self, mut f: F) -> RootEstimate
    where
        F: FnMut(f64) -> f64,
    {
        let SolverSettings {
            lower,
            upper,
            tolerance,
            max_iterations,
        } = self.settings;

        let f_lower = f(lower);
        let f_upper = f(upper);
        let bracketed = straddles(f_lower, f_upper);

        let mut brent = Brent::new(lower, f_lower, upper, f_upper);
        let mut iterations = 0;
        let mut converged = false;
        while iterations < max_iterations {
            iterations += 1;
            let step = brent.iterate(&mut f);
            let (lo, hi) = brent.bounds();
            if step == Step::Exact || hi - lo <= tolerance {
                converged = true;
                break;
            }
        }

        let (lo, hi) = brent.bounds();
        RootEstimate {
            t: brent.b,
            residual: brent.fb,
            lower: lo,
            upper: hi,
            iterations,
            bracketed,
            converged,
        }
    }
}

/// `true` when `a` and `b` do not share a strict sign. NaN never straddles.
fn straddles(a: f64, b: f64) -> bool {
    (a <= 0.0 && b >= 0.0) || (a >= 0.0 && b <= 0.0)
}

fn same_sign(a: f64, b: f64) -> bool {
    (a < 0.0 && b < 0.0) || (a > 0.0 && b > 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Bracket narrowed.
    Narrowed,
    /// Landed on an exact zero or the bracket collapsed to rounding noise.
    Exact,
}

/// Brent iteration state.
///
/// `b` is the best estimate, `c` the opposite end of the bracket and `a` the
/// previous value of `b`. `d` and `e` hold the last two step sizes.
#[derive(Debug, Clone, Copy)]
struct Brent {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    fa: f64,
    fb: f64,
    fc: f64,
}

impl Brent {
    fn new(lower: f64, f_lower: f64, upper: f64, f_upper: f64) -> Self {
        Self {
            a: lower,
            b: upper,
            c: upper,
            d: upper - lower,
            e: upper - lower,
            fa: f_lower,
            fb: f_upper,
            fc: f_upper,
        }
    }

    /// Ordered bracket `[min(b, c), max(b, c)]`.
    fn bounds(&self) -> (f64, f64) {
        if self.b < self.c {
            (self.b, self.c)
        } else {
            (self.c, self.b)
        }
    }

    #[allow(clippy::many_single_char_names, clippy::float_cmp)]
    fn iterate<F>(&mut self, f: &mut F) -> Step
    where
        F: FnMut(f64) -> f64,
    {
        let mut ac_equal = false;

        if same_sign(self.fb, self.fc) {
            ac_equal = true;
            self.c = self.a;
            self.fc = self.fa;
            self.d = self.b - self.a;
            self.e = self.b - self.a;
        }

        if self.fc.abs() < self.fb.abs() {
            ac_equal = true;
            self.a = self.b;
            self.b = self.c;
            self.c = self.a;
            self.fa = self.fb;
            self.fb = self.fc;
            self.fc = self.fa;
        }

        let tol = 0.5 * f64::EPSILON * self.b.abs();
        let m = 0.5 * (self.c - self.b);

        if self.fb == 0.0 || m.abs() <= tol {
            return Step::Exact;
        }

        if self.e.abs() < tol || self.fa.abs() <= self.fb.abs() {
            // bisection
            self.d = m;
            self.e = m;
        } else {
            let s = self.fb / self.fa;
            let (mut p, mut q) = if ac_equal {
                // secant
                (2.0 * m * s, 1.0 - s)
            } else {
                // inverse quadratic interpolation
                let q = self.fa / self.fc;
                let r = self.fb / self.fc;
                (
                    s * (2.0 * m * q * (q - r) - (self.b - self.a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };

            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }

            let min1 = 3.0 * m * q - (tol * q).abs();
            let min2 = (self.e * q).abs();
            if 2.0 * p < min1.min(min2) {
                self.e = self.d;
                self.d = p / q;
            } else {
                self.d = m;
                self.e = m;
            }
        }

        self.a = self.b;
        self.fa = self.fb;

        if self.d.abs() > tol {
            self.b += self.d;
        } else {
            self.b += if m > 0.0 { tol } else { -tol };
        }
        self.fb = f(self.b);

        if same_sign(self.fb, self.fc) {
            self.c = self.a;
        }

        if self.fb == 0.0 {
            Step::Exact
        } else {
            Step::Narrowed
        }
    }
}
