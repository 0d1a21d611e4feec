use crate::equation::Evaluation;

/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The estimate evaluated in this iteration.
    pub x: f64,

    /// Finite-difference derivative of the residual at `x`.
    pub derivative: f64,

    /// The next estimate produced by the Newton step.
    pub next_x: f64,

    /// Evaluation at `x`.
    pub eval: &'a Evaluation<I, O, 1>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the residual at `x`.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residual()
    }

    /// Returns the signed Newton step, `next_x - x`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.next_x - self.x
    }
}
