use sluice_core::constraint::{Constrained, StrictlyPositive};

use crate::{error::ParameterError, parameters::strictly_positive};

/// Channel roughness for the Manning-Strickler formula.
///
/// Stored as Manning's `n` (s·m^(-1/3)). The Strickler coefficient is its
/// reciprocal, `k_st = 1 / n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roughness {
    manning_n: Constrained<f64, StrictlyPositive>,
}

impl Roughness {
    /// Creates a roughness from Manning's `n`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is not finite and strictly positive.
    pub fn manning(n: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            manning_n: strictly_positive("manning_n", n)?,
        })
    }

    /// Creates a roughness from the Strickler coefficient `k_st` (m^(1/3)/s).
    ///
    /// # Errors
    ///
    /// Returns an error if `k_st` is not finite and strictly positive.
    pub fn strickler(k_st: f64) -> Result<Self, ParameterError> {
        let k_st = strictly_positive("strickler_k", k_st)?;
        Ok(Self {
            manning_n: strictly_positive("strickler_k", 1.0 / k_st.get())?,
        })
    }

    #[must_use]
    pub fn manning_n(&self) -> f64 {
        self.manning_n.get()
    }

    #[must_use]
    pub fn strickler_k(&self) -> f64 {
        1.0 / self.manning_n()
    }
}
