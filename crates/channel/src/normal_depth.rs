use std::error::Error as StdError;

use sluice_core::Observer;
use sluice_solvers::equation::newton::{self, Action, Config, Event, Status};

use crate::{
    error::Error,
    model::{ResidualFn, SectionModel, UniformFlowProblem, ZeroResidual},
    parameters::ChannelParameters,
    section::FlowGeometry,
};

/// A solved normal depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalDepth {
    /// Water depth of uniform flow, in m.
    pub depth: f64,

    /// Inverted Manning-Strickler residual at `depth`.
    pub residual: f64,

    /// Section geometry at `depth`.
    pub geometry: FlowGeometry,

    /// Number of Newton updates performed.
    pub iters: usize,

    /// How the iteration finished.
    pub status: Status,
}

/// Solves for the normal depth of a channel.
///
/// The initial guess must be a positive depth. Since the derivative is a
/// centered difference, a guess closer to zero than `config.step()` probes a
/// negative depth and fails with [`Error::Geometry`].
///
/// # Errors
///
/// Returns [`Error::Geometry`] if an iterate reaches a depth with degenerate
/// geometry, and [`Error::Solver`] if the iteration does not converge.
pub fn normal_depth(
    params: &ChannelParameters,
    initial_guess: f64,
    config: &Config,
) -> Result<NormalDepth, Error> {
    normal_depth_observed(params, initial_guess, config, ())
}

/// Solves for the normal depth, reporting each iteration to `observer`.
///
/// The observer can return [`Action::StopEarly`], in which case the current
/// estimate is returned with [`Status::StoppedByObserver`].
///
/// # Errors
///
/// See [`normal_depth`].
pub fn normal_depth_observed<Obs>(
    params: &ChannelParameters,
    initial_guess: f64,
    config: &Config,
    observer: Obs,
) -> Result<NormalDepth, Error>
where
    Obs: for<'a> Observer<Event<'a, f64, FlowGeometry>, Action>,
{
    let model = SectionModel::new(*params.section());
    let problem = UniformFlowProblem::new(*params);

    let solution = newton::solve(&model, &problem, initial_guess, config, observer)?;

    Ok(NormalDepth {
        depth: solution.x,
        residual: solution.residual,
        geometry: solution.snapshot.output,
        iters: solution.iters,
        status: solution.status,
    })
}

/// Finds the root of `residual_fn` with a single precision value.
///
/// `precision` is both the convergence tolerance and the finite-difference
/// step, as in [`Config::coupled`]. Pass [`residual`](crate::residual) to
/// solve for the normal depth.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `precision` is not finite and
/// positive, [`Error::Geometry`] if `residual_fn` fails with a
/// [`GeometryError`](crate::GeometryError), and [`Error::Solver`] otherwise.
pub fn solve<F, E>(
    residual_fn: F,
    initial_guess: f64,
    precision: f64,
    params: &ChannelParameters,
) -> Result<f64, Error>
where
    F: Fn(f64, &ChannelParameters) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    let config = Config::coupled(precision)?;
    let model = ResidualFn::new(residual_fn, params);

    let solution = newton::solve_unobserved(&model, &ZeroResidual, initial_guess, &config)?;
    Ok(solution.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{ConfigError, residual::residual};

    fn reference() -> ChannelParameters {
        ChannelParameters::symmetric(15.5, 5.1, 2.5, 0.05, 0.005).unwrap()
    }

    #[test]
    fn coupled_solve_reproduces_reference_depth() {
        let initial = 0.01;
        let depth = solve(residual, initial, initial / 10.0, &reference()).unwrap();

        assert_eq!(format!("{depth:.3}"), "1.356");
    }

    #[test]
    fn both_entry_points_agree() {
        let params = reference();
        let coupled = solve(residual, 0.01, 1e-3, &params).unwrap();
        let solved = normal_depth(&params, 0.01, &Config::default()).unwrap();

        assert_eq!(solved.status, Status::Converged);
        assert_relative_eq!(coupled, solved.depth, epsilon = 1e-6);
        assert_relative_eq!(solved.geometry.depth, solved.depth);
        assert!(solved.residual.abs() < 1e-9);
    }

    #[test]
    fn invalid_precision_is_a_config_error() {
        let err = solve(residual, 0.01, 0.0, &reference()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(ConfigError::XTol)));
    }

    #[test]
    fn guess_too_close_to_zero_hits_degenerate_geometry() {
        let err = normal_depth(&reference(), 1e-8, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::Geometry(g) if g.depth < 0.0));
    }

    #[test]
    fn observer_can_stop_early() {
        let mut seen = 0;
        let solved = normal_depth_observed(
            &reference(),
            0.01,
            &Config::default(),
            |_event: &Event<'_, f64, FlowGeometry>| {
                seen += 1;
                Some(Action::StopEarly)
            },
        )
        .unwrap();

        assert_eq!(seen, 1);
        assert_eq!(solved.iters, 1);
        assert_eq!(solved.status, Status::StoppedByObserver);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<ChannelParameters>();
        assert_send_sync::<NormalDepth>();
        assert_send_sync::<Config>();
        assert_send_sync::<Error>();
    }

    #[test]
    fn concurrent_solves_agree() {
        let params = reference();
        let config = Config::default();

        let (a, b) = std::thread::scope(|scope| {
            let a = scope.spawn(|| normal_depth(&params, 0.01, &config));
            let b = scope.spawn(|| normal_depth(&params, 0.01, &config));
            (a.join(), b.join())
        });

        let a = a.expect("thread a").unwrap();
        let b = b.expect("thread b").unwrap();
        assert_eq!(a.depth.to_bits(), b.depth.to_bits());
        assert_eq!(a, b);
    }
}
