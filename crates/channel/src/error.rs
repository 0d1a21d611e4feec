use thiserror::Error;

use sluice_core::constraint::ConstraintError;
use sluice_solvers::equation::newton::{self, ConfigError};

/// Errors that can occur when constructing channel parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParameterError {
    /// A parameter is NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    /// A parameter violates its sign constraint.
    #[error("{field} is out of range")]
    OutOfRange {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// Zero bottom width with two vertical banks encloses no area at any depth.
    #[error("section with zero bottom width and vertical banks has no flow area")]
    DegenerateSection,
}

/// The flow geometry at a trial depth is not physical.
///
/// Raised when the wetted perimeter is not positive or the flow area is
/// negative, which happens for negative trial depths.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error(
    "degenerate geometry at depth {depth} (area={area}, wetted_perimeter={wetted_perimeter})"
)]
pub struct GeometryError {
    pub depth: f64,
    pub area: f64,
    pub wetted_perimeter: f64,
}

/// Errors that can occur when solving for the normal depth.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid channel parameters")]
    Parameters(#[from] ParameterError),

    #[error("invalid solver configuration")]
    InvalidConfig(#[from] ConfigError),

    /// The residual was evaluated at a depth with degenerate geometry.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The Newton-Raphson iteration failed.
    #[error("normal depth iteration failed")]
    Solver(#[source] newton::Error),
}

impl Error {
    /// Returns true if the iteration failed to converge.
    #[must_use]
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, Self::Solver(err) if err.is_non_convergence())
    }
}

impl From<newton::Error> for Error {
    fn from(err: newton::Error) -> Self {
        match err {
            newton::Error::Model(source) => match source.downcast::<GeometryError>() {
                Ok(geometry) => Self::Geometry(*geometry),
                Err(source) => Self::Solver(newton::Error::Model(source)),
            },
            other => Self::Solver(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_model_errors_are_unwrapped() {
        let geometry = GeometryError {
            depth: -1.0,
            area: -2.0,
            wetted_perimeter: 0.5,
        };

        let err = Error::from(newton::Error::Model(Box::new(geometry)));

        assert!(matches!(err, Error::Geometry(e) if e == geometry));
    }

    #[test]
    fn other_solver_errors_are_wrapped() {
        let err = Error::from(newton::Error::MaxIters { iters: 3, x: 1.0 });

        assert!(err.is_non_convergence());
        assert!(matches!(
            err,
            Error::Solver(newton::Error::MaxIters { iters: 3, .. })
        ));
    }

    #[test]
    fn parameter_errors_name_the_field() {
        let err = ParameterError::OutOfRange {
            field: "discharge",
            source: ConstraintError::Zero,
        };
        assert_eq!(err.to_string(), "discharge is out of range");
    }
}
