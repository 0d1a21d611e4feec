//! Core traits and types for the Sluice solvers.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! channel models build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`EquationProblem`]: adapts solver variables to model inputs and
//!   extracts residuals from outputs
//! - [`constraint`]: type-level numeric constraints checked at construction

pub mod constraint;

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::EquationProblem;
pub use {model::Model, model::Snapshot};
