//! Newton-Raphson iteration for scalar equation problems.
//!
//! # Algorithm
//!
//! Starting from an initial guess `x0`, the solver forces a first iteration by
//! seeding the next estimate at `x0 + 10 * x_tol`, then repeats
//!
//! ```text
//! x_{k+1} = x_k - f(x_k) / f'(x_k)
//! ```
//!
//! until two successive estimates differ by at most `x_tol`. The derivative is
//! a centered finite difference with step `step` (see [`derivative`]).
//!
//! # Termination
//!
//! The iteration is bounded by [`Config::max_iters`]. Besides converging, a
//! solve ends with an error when:
//!
//! - the derivative is zero, non-finite, or smaller than `f64::EPSILON` in
//!   magnitude ([`Error::ZeroDerivative`]),
//! - a Newton step produces a non-finite estimate ([`Error::NonFiniteEstimate`]),
//! - the iteration limit is reached ([`Error::MaxIters`]).
//!
//! [`Error::is_non_convergence`] groups these three cases.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the residual and the
//! derivative at the current estimate are known and the next estimate has been
//! computed. Observers can return [`Action::StopEarly`] to end the solve with
//! the current estimate.
//!
//! Model and problem errors are never recovered from: they end the solve
//! immediately.
//!
//! [`derivative`]: crate::equation::derivative

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use sluice_core::{EquationProblem, Model, Observer};

use crate::equation::{derivative::try_central_difference, evaluate};

/// Offset, in units of `x_tol`, between the initial guess and the first estimate.
const SEED_OFFSET: f64 = 10.0;

/// Finds a root of the equation using Newton-Raphson iteration.
///
/// The observer receives an [`Event`] for each iteration.
/// See the [module docs](self) for details on termination and observer actions.
///
/// # Errors
///
/// Returns an error if the initial guess is not finite, the iteration fails
/// to converge, or the model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x0 });
    }

    let mut last_x = x0;
    let mut next_x = x0 + SEED_OFFSET * config.x_tol();
    let mut iters = 0;

    while (last_x - next_x).abs() > config.x_tol() {
        if iters == config.max_iters() {
            return Err(Error::MaxIters { iters, x: next_x });
        }
        iters += 1;

        let eval = evaluate(model, problem, [next_x])?;
        let residual = eval.residual();
        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual {
                x: next_x,
                residual,
            });
        }

        last_x = next_x;

        let derivative = try_central_difference(
            |x| evaluate(model, problem, [x]).map(|eval| eval.residual()),
            last_x,
            config.step(),
        )?;
        if !derivative.is_finite() || derivative.abs() < f64::EPSILON {
            return Err(Error::ZeroDerivative {
                x: last_x,
                derivative,
            });
        }

        next_x = last_x - residual / derivative;
        if !next_x.is_finite() {
            return Err(Error::NonFiniteEstimate {
                x: last_x,
                residual,
                derivative,
            });
        }

        let event = Event {
            iter: iters,
            x: last_x,
            derivative,
            next_x,
            eval: &eval,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iters));
        }
    }

    let eval = evaluate(model, problem, [next_x])?;
    Ok(Solution::from_eval(eval, Status::Converged, iters))
}

/// Runs Newton-Raphson iteration without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the initial guess is not finite, the iteration fails
/// to converge, or the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}
