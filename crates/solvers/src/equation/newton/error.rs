use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial guess is not finite: {x0}")]
    NonFiniteGuess { x0: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("derivative {derivative} at x = {x} is too close to zero")]
    ZeroDerivative { x: f64, derivative: f64 },

    #[error("Newton step from x = {x} is not finite (residual {residual}, derivative {derivative})")]
    NonFiniteEstimate {
        x: f64,
        residual: f64,
        derivative: f64,
    },

    #[error("no convergence after {iters} iterations, last estimate {x}")]
    MaxIters { iters: usize, x: f64 },

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    /// Returns true if the iteration itself failed to converge.
    ///
    /// This covers a vanishing derivative, a non-finite Newton step, and
    /// reaching the iteration limit.
    #[must_use]
    pub fn is_non_convergence(&self) -> bool {
        matches!(
            self,
            Self::ZeroDerivative { .. } | Self::NonFiniteEstimate { .. } | Self::MaxIters { .. }
        )
    }
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
