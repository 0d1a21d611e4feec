//! Reusable observers for the Sluice solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `sluice-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasEstimate`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`]: writes one `log` record per solver iteration
//! - [`Trace`]: collects a per-iteration history for later inspection
//!
//! [`Observer`]: sluice_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasEstimate`]: traits::HasEstimate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logging;
mod trace;

pub use logging::LogObserver;
pub use trace::{Trace, TracePoint};
