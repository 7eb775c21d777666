//! State samplers for motion planning
//!
//! Two sampler families exist: manifold samplers draw from a
//! distribution with no validity guarantee, while valid state samplers
//! reject samples until the validity oracle accepts one. Samplers carry
//! their own random generator state and are handed out one per planner
//! worker; see [`StateSamplerArray`].

pub mod sampler_array;
pub mod valid_state_sampler;

pub use sampler_array::{PooledSampler, SamplerKind, StateSamplerArray};
pub use valid_state_sampler::{UniformValidStateSampler, ValidStateSampler, DEFAULT_NR_ATTEMPTS};

use crate::manifold::State;

/// Sampler drawing states from a manifold's distributions, with no
/// validity guarantee.
///
/// Implementations hold internal pseudo-random generator state and are
/// therefore `Send` but not shared between threads.
pub trait ManifoldStateSampler: Send {
    /// Sample each coordinate uniformly within the space bounds
    fn sample_uniform(&mut self, state: &mut State);

    /// Sample uniformly within `distance` of `near` on each coordinate,
    /// then clamp the result into bounds
    fn sample_uniform_near(&mut self, state: &mut State, near: &State, distance: f64);

    /// Sample each coordinate from a normal distribution centered at
    /// `mean` with standard deviation `std_dev`, then clamp into bounds
    fn sample_gaussian(&mut self, state: &mut State, mean: &State, std_dev: f64);
}
