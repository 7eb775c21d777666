//! Euclidean state manifold over R^n
//!
//! The distance function is the L2 norm and interpolation is linear,
//! component-wise. Sampling is performed within axis-aligned bounds.

use itertools::izip;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::sync::Arc;

use crate::common::{PlanningError, PlanningResult};
use crate::manifold::{RealVectorBounds, State, StateManifold};
use crate::sampling::ManifoldStateSampler;

/// A manifold representing R^n with axis-aligned bounds
#[derive(Debug)]
pub struct RealVectorStateManifold {
    dimension: usize,
    bounds: RealVectorBounds,
}

impl RealVectorStateManifold {
    /// Create a manifold of the given dimension with zeroed bounds
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            bounds: RealVectorBounds::new(dimension),
        }
    }

    /// Create a manifold with the same `[low, high]` interval on every axis
    pub fn with_bounds(dimension: usize, low: f64, high: f64) -> Self {
        Self {
            dimension,
            bounds: RealVectorBounds::symmetric(dimension, low, high),
        }
    }

    /// Set the bounds of this manifold. This defines the range of the
    /// space in which sampling is performed.
    pub fn set_bounds(&mut self, bounds: RealVectorBounds) -> PlanningResult<()> {
        if bounds.dimension() != self.dimension {
            return Err(PlanningError::Configuration(format!(
                "Bounds have dimension {} but the manifold has dimension {}",
                bounds.dimension(),
                self.dimension
            )));
        }
        bounds.check()?;
        self.bounds = bounds;
        Ok(())
    }

    /// Get the bounds of this manifold
    pub fn bounds(&self) -> &RealVectorBounds {
        &self.bounds
    }
}

impl StateManifold for RealVectorStateManifold {
    fn name(&self) -> &str {
        "RealVector"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn maximum_extent(&self) -> f64 {
        self.bounds.diagonal_length()
    }

    fn distance(&self, state1: &State, state2: &State) -> f64 {
        state1
            .values()
            .iter()
            .zip(state2.values().iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    fn equal_states(&self, state1: &State, state2: &State) -> bool {
        // exact comparison; interpolated states may accumulate rounding
        state1.values() == state2.values()
    }

    fn interpolate(&self, from: &State, to: &State, t: f64, out: &mut State) {
        for (o, f, g) in izip!(out.values_mut(), from.values(), to.values()) {
            *o = f + t * (g - f);
        }
    }

    fn enforce_bounds(&self, state: &mut State) {
        for (v, l, h) in izip!(state.values_mut(), &self.bounds.low, &self.bounds.high) {
            if *v > *h {
                *v = *h;
            } else if *v < *l {
                *v = *l;
            }
        }
    }

    fn satisfies_bounds(&self, state: &State) -> bool {
        izip!(state.values(), &self.bounds.low, &self.bounds.high)
            .all(|(v, l, h)| *v >= *l && *v <= *h)
    }

    fn alloc_state(&self) -> State {
        State::new(self.dimension)
    }

    fn alloc_state_sampler(self: Arc<Self>) -> Box<dyn ManifoldStateSampler> {
        Box::new(RealVectorStateSampler::new(self))
    }

    fn setup(&self) -> PlanningResult<()> {
        if self.dimension == 0 {
            return Err(PlanningError::Configuration(
                "The dimension of the state manifold must be > 0".to_string(),
            ));
        }
        if self.bounds.dimension() != self.dimension {
            return Err(PlanningError::Configuration(format!(
                "Bounds do not match the dimension of the manifold: {} != {}",
                self.bounds.dimension(),
                self.dimension
            )));
        }
        self.bounds.check()
    }

    fn settings(&self) -> String {
        let mut out = format!("Real vector state manifold of dimension {}\n", self.dimension);
        out.push_str("  - bounds:");
        for (l, h) in self.bounds.low.iter().zip(self.bounds.high.iter()) {
            out.push_str(&format!(" [{}, {}]", l, h));
        }
        out.push('\n');
        out
    }
}

/// State sampler for the R^n manifold
pub struct RealVectorStateSampler {
    manifold: Arc<RealVectorStateManifold>,
    rng: StdRng,
}

impl RealVectorStateSampler {
    pub fn new(manifold: Arc<RealVectorStateManifold>) -> Self {
        Self {
            manifold,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a sampler with a fixed seed, for reproducible runs
    pub fn with_seed(manifold: Arc<RealVectorStateManifold>, seed: u64) -> Self {
        Self {
            manifold,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ManifoldStateSampler for RealVectorStateSampler {
    fn sample_uniform(&mut self, state: &mut State) {
        let bounds = self.manifold.bounds();
        for (v, l, h) in izip!(state.values_mut(), &bounds.low, &bounds.high) {
            *v = self.rng.gen_range(*l..=*h);
        }
    }

    fn sample_uniform_near(&mut self, state: &mut State, near: &State, distance: f64) {
        for (v, n) in state.values_mut().iter_mut().zip(near.values()) {
            *v = self.rng.gen_range((n - distance)..=(n + distance));
        }
        self.manifold.enforce_bounds(state);
    }

    fn sample_gaussian(&mut self, state: &mut State, mean: &State, std_dev: f64) {
        for (v, m) in state.values_mut().iter_mut().zip(mean.values()) {
            let z: f64 = self.rng.sample(StandardNormal);
            *v = m + z * std_dev;
        }
        self.manifold.enforce_bounds(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifold_2d() -> Arc<RealVectorStateManifold> {
        Arc::new(RealVectorStateManifold::with_bounds(2, -1.0, 1.0))
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let manifold = manifold_2d();
        let s = State::from_values(vec![0.3, -0.7]);
        assert_eq!(manifold.distance(&s, &s), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let manifold = manifold_2d();
        let a = State::from_values(vec![0.0, 0.0]);
        let b = State::from_values(vec![3.0, 4.0]);
        assert!((manifold.distance(&a, &b) - 5.0).abs() < 1e-10);
        assert_eq!(manifold.distance(&a, &b), manifold.distance(&b, &a));
    }

    #[test]
    fn test_interpolate_endpoints_exact() {
        let manifold = manifold_2d();
        let a = State::from_values(vec![0.1, -0.9]);
        let b = State::from_values(vec![0.7, 0.2]);
        let mut out = manifold.alloc_state();

        manifold.interpolate(&a, &b, 0.0, &mut out);
        assert!(manifold.equal_states(&out, &a));

        manifold.interpolate(&a, &b, 1.0, &mut out);
        assert!(manifold.equal_states(&out, &b));
    }

    #[test]
    fn test_interpolate_midpoint() {
        let manifold = manifold_2d();
        let a = State::from_values(vec![0.0, 0.0]);
        let b = State::from_values(vec![1.0, -1.0]);
        let mut out = manifold.alloc_state();
        manifold.interpolate(&a, &b, 0.5, &mut out);
        assert_eq!(out.values(), &[0.5, -0.5]);
    }

    #[test]
    fn test_enforce_bounds_idempotent() {
        let manifold = manifold_2d();
        let mut s = State::from_values(vec![3.0, -2.5]);
        manifold.enforce_bounds(&mut s);
        assert!(manifold.satisfies_bounds(&s));
        let once = s.clone();
        manifold.enforce_bounds(&mut s);
        assert_eq!(s, once);
    }

    #[test]
    fn test_maximum_extent() {
        let manifold = manifold_2d();
        assert!((manifold.maximum_extent() - 8.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_setup_zero_dimension_fails() {
        let manifold = RealVectorStateManifold::new(0);
        assert!(manifold.setup().is_err());
    }

    #[test]
    fn test_set_bounds_dimension_mismatch() {
        let mut manifold = RealVectorStateManifold::new(3);
        let bounds = RealVectorBounds::symmetric(2, -1.0, 1.0);
        assert!(manifold.set_bounds(bounds).is_err());
    }

    #[test]
    fn test_sample_uniform_within_bounds() {
        let manifold = manifold_2d();
        let mut sampler = RealVectorStateSampler::with_seed(manifold.clone(), 1);
        let mut s = manifold.alloc_state();
        for _ in 0..100 {
            sampler.sample_uniform(&mut s);
            assert!(manifold.satisfies_bounds(&s));
        }
    }

    #[test]
    fn test_sample_uniform_near_clamped() {
        let manifold = manifold_2d();
        let mut sampler = RealVectorStateSampler::with_seed(manifold.clone(), 2);
        let near = State::from_values(vec![1.0, 1.0]);
        let mut s = manifold.alloc_state();
        for _ in 0..100 {
            sampler.sample_uniform_near(&mut s, &near, 5.0);
            assert!(manifold.satisfies_bounds(&s));
        }
    }

    #[test]
    fn test_sample_gaussian_clamped() {
        let manifold = manifold_2d();
        let mut sampler = RealVectorStateSampler::with_seed(manifold.clone(), 3);
        let mean = State::from_values(vec![0.0, 0.0]);
        let mut s = manifold.alloc_state();
        for _ in 0..100 {
            sampler.sample_gaussian(&mut s, &mean, 2.0);
            assert!(manifold.satisfies_bounds(&s));
        }
    }
}
