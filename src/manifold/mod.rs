//! State manifold abstractions for sampling-based motion planning
//!
//! A state manifold defines the metric and topological structure of the
//! configuration space a planner searches: dimension, distance,
//! interpolation, bounds enforcement and state sampling.

pub mod bounds;
pub mod real_vector;
pub mod state;

pub use bounds::RealVectorBounds;
pub use real_vector::{RealVectorStateManifold, RealVectorStateSampler};
pub use state::State;

use crate::common::PlanningResult;
use crate::sampling::ManifoldStateSampler;
use std::sync::Arc;

/// Metric/topological space the planner operates in.
///
/// Implementations are immutable once [`setup`](StateManifold::setup)
/// has validated them, and are shared read-only across planner workers
/// as `Arc<dyn StateManifold>`.
pub trait StateManifold: Send + Sync {
    /// Name of this manifold, for diagnostics
    fn name(&self) -> &str;

    /// Dimension of the space
    fn dimension(&self) -> usize;

    /// Upper bound on the distance between any two in-bounds states
    fn maximum_extent(&self) -> f64;

    /// Distance between two states; always non-negative
    fn distance(&self, state1: &State, state2: &State) -> f64;

    /// Check whether two states are equal, by exact value comparison
    fn equal_states(&self, state1: &State, state2: &State) -> bool;

    /// Write into `out` the state at parameter `t` in `[0, 1]` along the
    /// straight path model of the space, from `from` to `to`
    fn interpolate(&self, from: &State, to: &State, t: f64, out: &mut State);

    /// Copy `source` into `destination`
    fn copy_state(&self, destination: &mut State, source: &State) {
        destination.clone_from(source);
    }

    /// Clamp each coordinate of `state` into its bound interval.
    /// Idempotent; the result always satisfies
    /// [`satisfies_bounds`](StateManifold::satisfies_bounds).
    fn enforce_bounds(&self, state: &mut State);

    /// Check whether `state` lies within the bounds of the space
    fn satisfies_bounds(&self, state: &State) -> bool;

    /// Allocate a fresh state for this space
    fn alloc_state(&self) -> State;

    /// Allocate a sampler bound to this manifold, carrying its own
    /// random generator state
    fn alloc_state_sampler(self: Arc<Self>) -> Box<dyn ManifoldStateSampler>;

    /// Validate the structural invariants of the space. Fails with a
    /// configuration error if the dimension is zero or the bounds do not
    /// match the dimension.
    fn setup(&self) -> PlanningResult<()>;

    /// Human-readable description of the space settings. Diagnostic text
    /// only; the format is not a stable contract.
    fn settings(&self) -> String;
}
