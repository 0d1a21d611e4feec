//! Numerical solvers for Sluice problems.
//!
//! Solvers work against the [`Model`] and problem traits from `sluice-core`,
//! so any residual that can be expressed as a model call can be driven to
//! zero. The channel crate uses them to find normal flow depths.
//!
//! [`Model`]: sluice_core::Model

pub mod equation;
