use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Discharge, roughness, and bed slope must all be strictly positive for the
/// Manning-Strickler formula to describe a flowing channel.
///
/// # Example
///
/// ```
/// use sluice_core::constraint::StrictlyPositive;
///
/// let slope = StrictlyPositive::new(0.005).unwrap();
/// assert_eq!(slope.into_inner(), 0.005);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-15.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Fails if the value is zero, negative, or not a number.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_positive() {
        assert_relative_eq!(StrictlyPositive::new(15.5).unwrap().into_inner(), 15.5);
        let tiny = StrictlyPositive::new(f64::MIN_POSITIVE).unwrap();
        assert_relative_eq!(tiny.get(), f64::MIN_POSITIVE);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-0.0), Err(ConstraintError::Zero));
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert_eq!(StrictlyPositive::new(-1.0), Err(ConstraintError::Negative));
        assert_eq!(StrictlyPositive::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
