//! Normal depth as a `Model` and `EquationProblem` pair.
//!
//! [`SectionModel`] maps a trial depth to the section's [`FlowGeometry`] and
//! [`UniformFlowProblem`] turns that geometry into the inverted
//! Manning-Strickler residual. Together they can be passed to any scalar
//! equation solver in `sluice-solvers`.

use std::{convert::Infallible, error::Error as StdError, marker::PhantomData};

use sluice_core::{EquationProblem, Model};

use crate::{
    error::GeometryError,
    parameters::ChannelParameters,
    residual::uniform_flow_residual,
    section::{FlowGeometry, Section},
};

/// Evaluates the flow geometry of a section at a trial depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionModel {
    section: Section,
}

impl SectionModel {
    #[must_use]
    pub fn new(section: Section) -> Self {
        Self { section }
    }
}

impl Model for SectionModel {
    type Input = f64;
    type Output = FlowGeometry;
    type Error = GeometryError;

    fn call(&self, depth: &f64) -> Result<FlowGeometry, GeometryError> {
        self.section.flow_geometry(*depth)
    }
}

/// Drives the section factor `A · R^(2/3)` to the value uniform flow requires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformFlowProblem {
    params: ChannelParameters,
}

impl UniformFlowProblem {
    #[must_use]
    pub fn new(params: ChannelParameters) -> Self {
        Self { params }
    }
}

impl EquationProblem<1> for UniformFlowProblem {
    type Input = f64;
    type Output = FlowGeometry;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _depth: &f64, geometry: &FlowGeometry) -> Result<[f64; 1], Self::Error> {
        Ok([uniform_flow_residual(&self.params, geometry)])
    }
}

/// Adapts a `residual(depth, params)` function into a [`Model`].
pub(crate) struct ResidualFn<'p, F, E> {
    f: F,
    params: &'p ChannelParameters,
    _error: PhantomData<fn() -> E>,
}

impl<'p, F, E> ResidualFn<'p, F, E>
where
    F: Fn(f64, &ChannelParameters) -> Result<f64, E>,
{
    pub(crate) fn new(f: F, params: &'p ChannelParameters) -> Self {
        Self {
            f,
            params,
            _error: PhantomData,
        }
    }
}

impl<F, E> Model for ResidualFn<'_, F, E>
where
    F: Fn(f64, &ChannelParameters) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    type Input = f64;
    type Output = f64;
    type Error = E;

    fn call(&self, depth: &f64) -> Result<f64, E> {
        (self.f)(*depth, self.params)
    }
}

/// Uses a model's scalar output directly as the residual.
pub(crate) struct ZeroResidual;

impl EquationProblem<1> for ZeroResidual {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _depth: &f64, residual: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([*residual])
    }
}
