//! Centered finite-difference derivatives.
//!
//! The derivative of `f` at `x` is approximated by
//!
//! ```text
//! f'(x) ≈ (f(x + Δx) - f(x - Δx)) / (2 Δx)
//! ```
//!
//! The step `Δx` is used as given. There is no adaptive step selection, so
//! accuracy degrades when `Δx` is too large (truncation error) or too small
//! (cancellation error).

/// Approximates `f'(x)` with a centered difference of step `step`.
///
/// `step` must be finite and strictly positive.
///
/// # Example
///
/// ```
/// use sluice_solvers::equation::derivative::central_difference;
///
/// let slope = central_difference(|x| x * x, 3.0, 1e-4);
/// assert!((slope - 6.0).abs() < 1e-3);
/// ```
pub fn central_difference<F>(mut f: F, x: f64, step: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    debug_assert!(step.is_finite() && step > 0.0, "step must be finite and positive");
    (f(x + step) - f(x - step)) / (2.0 * step)
}

/// Approximates `f'(x)` for a fallible `f`.
///
/// Identical to [`central_difference`], except that the first failing
/// evaluation is returned as-is.
///
/// # Errors
///
/// Returns the error of whichever evaluation of `f` fails first.
pub fn try_central_difference<F, E>(mut f: F, x: f64, step: f64) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    debug_assert!(step.is_finite() && step > 0.0, "step must be finite and positive");
    let forward = f(x + step)?;
    let backward = f(x - step)?;
    Ok((forward - backward) / (2.0 * step))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn square_at_three() {
        let slope = central_difference(|x| x * x, 3.0, 1e-4);
        assert!((slope - 6.0).abs() < 1e-3);
    }

    #[test]
    fn exact_for_quadratics() {
        // Centered differences have no truncation error up to second order.
        let slope = central_difference(|x| 2.0 * x * x - 3.0 * x + 1.0, 0.5, 0.25);
        assert_relative_eq!(slope, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn deterministic() {
        let f = |x: f64| x.sin() * x.exp();
        let first = central_difference(f, 0.7, 1e-5);
        let second = central_difference(f, 0.7, 1e-5);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn constant_function_has_zero_slope() {
        let slope = central_difference(|_| 4.2, 10.0, 1e-3);
        assert_relative_eq!(slope, 0.0);
    }

    #[test]
    fn fallible_propagates_first_error() {
        let result: Result<f64, &str> =
            try_central_difference(|x| if x > 1.0 { Err("too big") } else { Ok(x) }, 1.0, 0.1);
        assert_eq!(result, Err("too big"));
    }

    #[test]
    fn fallible_matches_infallible() {
        let infallible = central_difference(f64::cbrt, 8.0, 1e-4);
        let fallible: Result<f64, ()> = try_central_difference(|x| Ok(x.cbrt()), 8.0, 1e-4);
        assert_relative_eq!(fallible.unwrap(), infallible);
        assert_relative_eq!(infallible, 1.0 / 12.0, epsilon = 1e-8);
    }
}
