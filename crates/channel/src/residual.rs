//! The Manning-Strickler formula, forward and inverted.

use crate::{error::GeometryError, parameters::ChannelParameters, section::FlowGeometry};

/// Evaluates the inverted Manning-Strickler formula at a trial depth.
///
/// Returns `Q · n / √S₀ − A · R^(2/3)`, which is zero at the normal depth,
/// negative above it, and positive below it.
///
/// # Errors
///
/// Returns a [`GeometryError`] if the section geometry at `depth` is not
/// physical.
pub fn residual(depth: f64, params: &ChannelParameters) -> Result<f64, GeometryError> {
    let geometry = params.section().flow_geometry(depth)?;
    Ok(uniform_flow_residual(params, &geometry))
}

/// Computes the discharge of uniform flow at `depth`,
/// `Q = (1 / n) · A · R^(2/3) · √S₀`.
///
/// The discharge stored in `params` is ignored.
///
/// # Errors
///
/// Returns a [`GeometryError`] if the section geometry at `depth` is not
/// physical.
pub fn discharge(depth: f64, params: &ChannelParameters) -> Result<f64, GeometryError> {
    let geometry = params.section().flow_geometry(depth)?;
    Ok(geometry.section_factor() * params.bed_slope().sqrt() / params.roughness().manning_n())
}

/// Computes the cross-sectional mean velocity of uniform flow at `depth`.
///
/// # Errors
///
/// Returns a [`GeometryError`] if the section geometry at `depth` is not
/// physical or the flow area is zero.
pub fn mean_velocity(depth: f64, params: &ChannelParameters) -> Result<f64, GeometryError> {
    let geometry = params.section().flow_geometry(depth)?;
    if geometry.area <= 0.0 {
        return Err(GeometryError {
            depth,
            area: geometry.area,
            wetted_perimeter: geometry.wetted_perimeter,
        });
    }
    Ok(discharge(depth, params)? / geometry.area)
}

pub(crate) fn uniform_flow_residual(params: &ChannelParameters, geometry: &FlowGeometry) -> f64 {
    params.required_section_factor() - geometry.section_factor()
}
