use sluice_core::constraint::{Constrained, NonNegative, StrictlyPositive};

use crate::{error::ParameterError, roughness::Roughness, section::Section};

/// Validated inputs of a normal-depth calculation.
///
/// Every field is checked at construction, so an existing value always
/// describes a flowing channel: positive discharge, roughness, and bed slope,
/// and a section that encloses area above the bed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "raw::RawParameters", into = "raw::RawParameters")
)]
pub struct ChannelParameters {
    discharge: Constrained<f64, StrictlyPositive>,
    section: Section,
    roughness: Roughness,
    bed_slope: Constrained<f64, StrictlyPositive>,
}

impl ChannelParameters {
    /// Creates channel parameters.
    ///
    /// # Parameters
    ///
    /// - `discharge`: flow rate `Q` in m³/s
    /// - `bottom_width`: bed width `b` in m
    /// - `left_slope`, `right_slope`: bank slopes `m_l`, `m_r` (run per rise)
    /// - `manning_n`: Manning's roughness coefficient `n` in s·m^(-1/3)
    /// - `bed_slope`: longitudinal bed slope `S₀`
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first invalid field, or
    /// [`ParameterError::DegenerateSection`] for a section without area.
    pub fn new(
        discharge: f64,
        bottom_width: f64,
        left_slope: f64,
        right_slope: f64,
        manning_n: f64,
        bed_slope: f64,
    ) -> Result<Self, ParameterError> {
        Self::from_parts(
            discharge,
            Section::new(bottom_width, left_slope, right_slope)?,
            Roughness::manning(manning_n)?,
            bed_slope,
        )
    }

    /// Creates channel parameters with the same slope on both banks.
    ///
    /// # Errors
    ///
    /// See [`ChannelParameters::new`].
    pub fn symmetric(
        discharge: f64,
        bottom_width: f64,
        bank_slope: f64,
        manning_n: f64,
        bed_slope: f64,
    ) -> Result<Self, ParameterError> {
        Self::new(
            discharge,
            bottom_width,
            bank_slope,
            bank_slope,
            manning_n,
            bed_slope,
        )
    }

    /// Creates channel parameters from an already validated section and roughness.
    ///
    /// # Errors
    ///
    /// Returns an error if `discharge` or `bed_slope` is not finite and
    /// strictly positive.
    pub fn from_parts(
        discharge: f64,
        section: Section,
        roughness: Roughness,
        bed_slope: f64,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            discharge: strictly_positive("discharge", discharge)?,
            section,
            roughness,
            bed_slope: strictly_positive("bed_slope", bed_slope)?,
        })
    }

    /// Returns a copy with a different roughness.
    #[must_use]
    pub fn with_roughness(self, roughness: Roughness) -> Self {
        Self { roughness, ..self }
    }

    /// Returns a copy with a different discharge.
    ///
    /// # Errors
    ///
    /// Returns an error if `discharge` is not finite and strictly positive.
    pub fn with_discharge(self, discharge: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            discharge: strictly_positive("discharge", discharge)?,
            ..self
        })
    }

    #[must_use]
    pub fn discharge(&self) -> f64 {
        self.discharge.get()
    }

    #[must_use]
    pub fn section(&self) -> &Section {
        &self.section
    }

    #[must_use]
    pub fn roughness(&self) -> Roughness {
        self.roughness
    }

    #[must_use]
    pub fn bed_slope(&self) -> f64 {
        self.bed_slope.get()
    }

    /// Returns the section factor `A · R^(2/3)` that uniform flow must reach,
    /// `Q · n / √S₀`.
    #[must_use]
    pub fn required_section_factor(&self) -> f64 {
        self.discharge() * self.roughness.manning_n() / self.bed_slope().sqrt()
    }
}

/// Validates a finite, strictly positive parameter.
pub(crate) fn strictly_positive(
    field: &'static str,
    value: f64,
) -> Result<Constrained<f64, StrictlyPositive>, ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NonFinite { field });
    }
    StrictlyPositive::new(value).map_err(|source| ParameterError::OutOfRange { field, source })
}

/// Validates a finite, non-negative parameter.
pub(crate) fn non_negative(
    field: &'static str,
    value: f64,
) -> Result<Constrained<f64, NonNegative>, ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NonFinite { field });
    }
    NonNegative::new(value).map_err(|source| ParameterError::OutOfRange { field, source })
}

#[cfg(feature = "serde")]
mod raw {
    use serde::{Deserialize, Serialize};

    use super::{ChannelParameters, ParameterError, Roughness, Section};

    /// Flat, unvalidated form used for (de)serialization.
    #[derive(Serialize, Deserialize)]
    pub(super) struct RawParameters {
        discharge: f64,
        bottom_width: f64,
        left_slope: f64,
        right_slope: f64,
        manning_n: f64,
        bed_slope: f64,
    }

    impl TryFrom<RawParameters> for ChannelParameters {
        type Error = ParameterError;

        fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
            ChannelParameters::from_parts(
                raw.discharge,
                Section::new(raw.bottom_width, raw.left_slope, raw.right_slope)?,
                Roughness::manning(raw.manning_n)?,
                raw.bed_slope,
            )
        }
    }

    impl From<ChannelParameters> for RawParameters {
        fn from(params: ChannelParameters) -> Self {
            let section = params.section();
            Self {
                discharge: params.discharge(),
                bottom_width: section.bottom_width(),
                left_slope: section.left_slope(),
                right_slope: section.right_slope(),
                manning_n: params.roughness().manning_n(),
                bed_slope: params.bed_slope(),
            }
        }
    }
}
