use sluice_core::Observer;

use crate::traits::{HasEstimate, HasResidual};

/// One recorded solver iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub iter: usize,
    pub x: f64,
    pub residual: f64,
}

/// An observer that records the estimate and residual of every event.
///
/// Only `&mut Trace` is an observer: pass `&mut trace` to the solver and
/// inspect [`points`](Trace::points) afterwards.
///
/// # Example
///
/// ```ignore
/// let mut trace = Trace::new();
/// newton::solve(&model, &problem, x0, &config, &mut trace)?;
/// for point in trace.points() {
///     println!("{}: {} -> {}", point.iter, point.x, point.residual);
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    points: Vec<TracePoint>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded points in iteration order.
    #[must_use]
    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    /// Consumes the trace and returns the recorded points.
    #[must_use]
    pub fn into_points(self) -> Vec<TracePoint> {
        self.points
    }
}

impl<E, A> Observer<E, A> for &mut Trace
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.points.push(TracePoint {
            iter: event.iter(),
            x: event.x(),
            residual: event.residual(),
        });
        None
    }
}
