//! Normal flow depth of trapezoidal open channels.
//!
//! Uniform flow in an open channel satisfies the Manning-Strickler formula
//!
//! ```text
//! Q = (1 / n) · A · R^(2/3) · √S₀
//! ```
//!
//! where the flow area `A` and hydraulic radius `R` depend on the water depth.
//! Given the discharge `Q`, this crate inverts the formula for the depth (the
//! *normal depth*) with Newton-Raphson iteration from `sluice-solvers`.
//!
//! # Overview
//!
//! - [`ChannelParameters`] holds a validated discharge, [`Section`],
//!   [`Roughness`], and bed slope.
//! - [`residual`] evaluates the inverted formula at a trial depth; it is zero
//!   at the normal depth.
//! - [`normal_depth`] solves for the depth with a [`Config`], and
//!   [`normal_depth_observed`] does the same while reporting every iteration
//!   to an observer.
//! - [`solve`] takes a residual function and a single precision value that
//!   serves as both the convergence tolerance and the derivative step.
//! - [`discharge`] and [`mean_velocity`] evaluate the forward formula, which
//!   is useful for checking a solved depth.
//!
//! # Example
//!
//! ```
//! use sluice_channel::{ChannelParameters, Config, discharge, normal_depth};
//!
//! let params = ChannelParameters::symmetric(15.5, 5.1, 2.5, 0.05, 0.005)?;
//! let solved = normal_depth(&params, 0.01, &Config::default())?;
//!
//! assert!((solved.depth - 1.3563).abs() < 1e-3);
//! assert!((discharge(solved.depth, &params)? - 15.5).abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Config`]: sluice_solvers::equation::newton::Config

mod error;
mod model;
mod normal_depth;
mod parameters;
mod residual;
mod roughness;
mod section;

pub use error::{Error, GeometryError, ParameterError};
pub use model::{SectionModel, UniformFlowProblem};
pub use normal_depth::{NormalDepth, normal_depth, normal_depth_observed, solve};
pub use parameters::ChannelParameters;
pub use residual::{discharge, mean_velocity, residual};
pub use roughness::Roughness;
pub use section::{FlowGeometry, Section};

pub use sluice_solvers::equation::newton::{Action, Config, ConfigError, Event, Status};
