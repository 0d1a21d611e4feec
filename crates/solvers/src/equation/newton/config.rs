use thiserror::Error;

/// Configuration for the Newton-Raphson solver.
///
/// The convergence tolerance (`x_tol`) and the finite-difference step
/// (`step`) are independent. Use [`Config::coupled`] to drive both from a
/// single precision value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_tol: f64,
    step: f64,
}

/// Errors that can occur when validating a Newton-Raphson solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_tol must be finite and positive")]
    XTol,

    #[error("step must be finite and positive")]
    Step,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_tol: 1e-10,
            step: 1e-6,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_tol` or `step` is not finite and positive.
    pub fn new(max_iters: usize, x_tol: f64, step: f64) -> Result<Self, ConfigError> {
        if !x_tol.is_finite() || x_tol <= 0.0 {
            return Err(ConfigError::XTol);
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }

        Ok(Self {
            max_iters,
            x_tol,
            step,
        })
    }

    /// Creates a config where one `precision` is both the convergence
    /// tolerance and the finite-difference step.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is not finite and positive.
    pub fn coupled(precision: f64) -> Result<Self, ConfigError> {
        Self::new(Self::default().max_iters, precision, precision)
    }

    /// Returns a copy of this config with a different iteration limit.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the maximum number of Newton updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance between successive estimates.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the finite-difference step used for the derivative.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}
