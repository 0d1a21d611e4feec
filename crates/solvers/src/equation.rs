//! Solvers for equation problems: finding roots of residual equations.
//!
//! An [`EquationProblem`] maps solver variables `x: [f64; N]` to model inputs,
//! calls the model, and computes residuals. Solvers in this module drive those
//! residuals toward zero.
//!
//! # Solvers
//!
//! - [`newton`]: Newton-Raphson iteration with a finite-difference derivative
//!
//! # Utilities
//!
//! - [`derivative`]: centered finite-difference derivatives
//!
//! [`EquationProblem`]: sluice_core::EquationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod derivative;
pub mod newton;
