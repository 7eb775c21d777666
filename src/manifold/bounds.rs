//! Axis-aligned bounds for real vector state spaces

use crate::common::{PlanningError, PlanningResult};

/// Lower and upper bounds for each coordinate of a real vector space.
///
/// Sampling and bounds enforcement are performed within these intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct RealVectorBounds {
    pub low: Vec<f64>,
    pub high: Vec<f64>,
}

impl RealVectorBounds {
    /// Create zeroed bounds for a space of the given dimension
    pub fn new(dimension: usize) -> Self {
        Self {
            low: vec![0.0; dimension],
            high: vec![0.0; dimension],
        }
    }

    /// Create bounds with the same interval on every axis
    pub fn symmetric(dimension: usize, low: f64, high: f64) -> Self {
        Self {
            low: vec![low; dimension],
            high: vec![high; dimension],
        }
    }

    /// Set the lower bound of every axis to `value`
    pub fn set_low(&mut self, value: f64) {
        for l in self.low.iter_mut() {
            *l = value;
        }
    }

    /// Set the upper bound of every axis to `value`
    pub fn set_high(&mut self, value: f64) {
        for h in self.high.iter_mut() {
            *h = value;
        }
    }

    /// Set the bounds of axis `index`
    pub fn set_axis(&mut self, index: usize, low: f64, high: f64) {
        self.low[index] = low;
        self.high[index] = high;
    }

    /// Number of axes these bounds constrain
    pub fn dimension(&self) -> usize {
        self.low.len()
    }

    /// Length of the diagonal of the bounded box
    pub fn diagonal_length(&self) -> f64 {
        self.low
            .iter()
            .zip(self.high.iter())
            .map(|(l, h)| (h - l).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Volume of the bounded box
    pub fn volume(&self) -> f64 {
        self.low
            .iter()
            .zip(self.high.iter())
            .map(|(l, h)| h - l)
            .product()
    }

    /// Check that the bounds are well formed: equal-length low/high
    /// vectors with `low[i] <= high[i]` on every axis
    pub fn check(&self) -> PlanningResult<()> {
        if self.low.len() != self.high.len() {
            return Err(PlanningError::Configuration(format!(
                "Bounds have {} lower values and {} upper values",
                self.low.len(),
                self.high.len()
            )));
        }
        for (i, (l, h)) in self.low.iter().zip(self.high.iter()).enumerate() {
            if l > h {
                return Err(PlanningError::Configuration(format!(
                    "Bounds for axis {} are inverted: low = {} > high = {}",
                    i, l, h
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_check_ok() {
        let bounds = RealVectorBounds::symmetric(3, -1.0, 1.0);
        assert!(bounds.check().is_ok());
    }

    #[test]
    fn test_bounds_check_inverted() {
        let mut bounds = RealVectorBounds::new(2);
        bounds.set_axis(1, 2.0, -2.0);
        assert!(bounds.check().is_err());
    }

    #[test]
    fn test_diagonal_length() {
        let bounds = RealVectorBounds::symmetric(2, 0.0, 3.0);
        assert!((bounds.diagonal_length() - 18.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_volume() {
        let mut bounds = RealVectorBounds::new(2);
        bounds.set_axis(0, 0.0, 2.0);
        bounds.set_axis(1, -1.0, 3.0);
        assert!((bounds.volume() - 8.0).abs() < 1e-10);
    }
}
