//! Trapezoidal cross-section geometry.

use sluice_core::constraint::{Constrained, NonNegative};

use crate::{
    error::{GeometryError, ParameterError},
    parameters::non_negative,
};

/// A trapezoidal cross-section: a flat bottom between two straight banks.
///
/// Bank slopes are horizontal run per unit of rise, so a slope of `0` is a
/// vertical wall. Rectangular (`m_l = m_r = 0`) and triangular (`b = 0`)
/// sections are special cases; a section with zero bottom width and two
/// vertical banks is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    bottom_width: Constrained<f64, NonNegative>,
    left_slope: Constrained<f64, NonNegative>,
    right_slope: Constrained<f64, NonNegative>,
}

/// Flow geometry of a [`Section`] at a given water depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowGeometry {
    pub depth: f64,
    pub area: f64,
    pub wetted_perimeter: f64,
    pub hydraulic_radius: f64,
    pub top_width: f64,
}

impl Section {
    /// Creates a section from its bottom width and bank slopes.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is negative or not finite, or if the
    /// section has zero bottom width and two vertical banks.
    pub fn new(
        bottom_width: f64,
        left_slope: f64,
        right_slope: f64,
    ) -> Result<Self, ParameterError> {
        let section = Self {
            bottom_width: non_negative("bottom_width", bottom_width)?,
            left_slope: non_negative("left_slope", left_slope)?,
            right_slope: non_negative("right_slope", right_slope)?,
        };

        if section.bottom_width() == 0.0
            && section.left_slope() == 0.0
            && section.right_slope() == 0.0
        {
            return Err(ParameterError::DegenerateSection);
        }

        Ok(section)
    }

    /// Creates a section with the same slope on both banks.
    ///
    /// # Errors
    ///
    /// See [`Section::new`].
    pub fn symmetric(bottom_width: f64, bank_slope: f64) -> Result<Self, ParameterError> {
        Self::new(bottom_width, bank_slope, bank_slope)
    }

    #[must_use]
    pub fn bottom_width(&self) -> f64 {
        self.bottom_width.get()
    }

    #[must_use]
    pub fn left_slope(&self) -> f64 {
        self.left_slope.get()
    }

    #[must_use]
    pub fn right_slope(&self) -> f64 {
        self.right_slope.get()
    }

    /// Flow area at `depth`.
    #[must_use]
    pub fn area(&self, depth: f64) -> f64 {
        let b = self.bottom_width();
        ((depth * self.left_slope() + depth * self.right_slope() + b) + b) / 2.0 * depth
    }

    /// Wetted perimeter at `depth`.
    #[must_use]
    pub fn wetted_perimeter(&self, depth: f64) -> f64 {
        let bank = |m: f64| depth * (m * m + 1.0).sqrt();
        self.bottom_width() + bank(self.left_slope()) + bank(self.right_slope())
    }

    /// Free-surface width at `depth`.
    #[must_use]
    pub fn top_width(&self, depth: f64) -> f64 {
        self.bottom_width() + depth * (self.left_slope() + self.right_slope())
    }

    /// Computes the flow geometry at `depth`.
    ///
    /// A depth of zero is valid for sections with a bottom width and yields a
    /// zero area.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the area is negative, the wetted
    /// perimeter is not positive, or either is not finite.
    pub fn flow_geometry(&self, depth: f64) -> Result<FlowGeometry, GeometryError> {
        let area = self.area(depth);
        let wetted_perimeter = self.wetted_perimeter(depth);

        let physical = area.is_finite()
            && wetted_perimeter.is_finite()
            && area >= 0.0
            && wetted_perimeter > 0.0;
        if !physical {
            return Err(GeometryError {
                depth,
                area,
                wetted_perimeter,
            });
        }

        Ok(FlowGeometry {
            depth,
            area,
            wetted_perimeter,
            hydraulic_radius: area / wetted_perimeter,
            top_width: self.top_width(depth),
        })
    }
}

impl FlowGeometry {
    /// Returns the section factor for uniform flow, `A · R^(2/3)`.
    #[must_use]
    pub fn section_factor(&self) -> f64 {
        self.area * self.hydraulic_radius.powf(2.0 / 3.0)
    }

    /// Returns the hydraulic depth, `A / T`.
    #[must_use]
    pub fn hydraulic_depth(&self) -> f64 {
        self.area / self.top_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use sluice_core::constraint::ConstraintError;

    #[test]
    fn rectangle() {
        let section = Section::new(4.0, 0.0, 0.0).unwrap();
        let geometry = section.flow_geometry(2.0).unwrap();

        assert_relative_eq!(geometry.area, 8.0);
        assert_relative_eq!(geometry.wetted_perimeter, 8.0);
        assert_relative_eq!(geometry.hydraulic_radius, 1.0);
        assert_relative_eq!(geometry.top_width, 4.0);
        assert_relative_eq!(geometry.section_factor(), 8.0);
        assert_relative_eq!(geometry.hydraulic_depth(), 2.0);
    }

    #[test]
    fn asymmetric_trapezoid() {
        let section = Section::new(2.0, 1.0, 3.0).unwrap();
        let depth = 1.5;

        // Bottom rectangle plus two bank triangles.
        let area = 2.0 * depth + 0.5 * depth * depth * (1.0 + 3.0);
        let perimeter = 2.0 + depth * 2.0_f64.sqrt() + depth * 10.0_f64.sqrt();

        assert_relative_eq!(section.area(depth), area, epsilon = 1e-12);
        assert_relative_eq!(section.wetted_perimeter(depth), perimeter, epsilon = 1e-12);
        assert_relative_eq!(section.top_width(depth), 2.0 + 4.0 * depth);
    }

    #[test]
    fn right_triangle_is_valid() {
        let section = Section::new(0.0, 0.0, 1.0).unwrap();
        assert_relative_eq!(section.area(2.0), 2.0);
        assert_relative_eq!(section.wetted_perimeter(2.0), 2.0 + 2.0 * 2.0_f64.sqrt());
    }

    #[test]
    fn zero_depth_has_zero_area() {
        let section = Section::symmetric(5.1, 2.5).unwrap();
        let geometry = section.flow_geometry(0.0).unwrap();

        assert_eq!(geometry.area, 0.0);
        assert_eq!(geometry.section_factor(), 0.0);
    }

    #[test]
    fn negative_depth_is_degenerate() {
        let section = Section::symmetric(5.1, 2.5).unwrap();
        let err = section.flow_geometry(-0.1).unwrap_err();

        assert_relative_eq!(err.depth, -0.1);
        assert!(err.area < 0.0);
    }

    #[test]
    fn triangle_at_zero_depth_is_degenerate() {
        let section = Section::symmetric(0.0, 1.0).unwrap();
        let err = section.flow_geometry(0.0).unwrap_err();
        assert_eq!(err.wetted_perimeter, 0.0);
    }

    #[test]
    fn non_finite_depth_is_degenerate() {
        let section = Section::symmetric(5.1, 2.5).unwrap();
        assert!(section.flow_geometry(f64::NAN).is_err());
        assert!(section.flow_geometry(f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_vertical_walls_without_bottom() {
        assert_eq!(
            Section::new(0.0, 0.0, 0.0),
            Err(ParameterError::DegenerateSection)
        );
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        assert_eq!(
            Section::new(-1.0, 0.0, 0.0),
            Err(ParameterError::OutOfRange {
                field: "bottom_width",
                source: ConstraintError::Negative,
            })
        );
        assert_eq!(
            Section::new(1.0, f64::NAN, 0.0),
            Err(ParameterError::NonFinite {
                field: "left_slope"
            })
        );
    }
}
