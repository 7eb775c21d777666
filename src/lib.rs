//! RustMotionPlanning - state-space core for sampling-based motion planning
//!
//! This crate provides the geometric state-space abstraction and
//! motion-validity infrastructure that sampling-based planners are built
//! on: metric state manifolds, validity checking, discretized motion
//! validation and thread-aware state sampling.

// Core modules
pub mod common;

// State space and motion validity modules
pub mod manifold;
pub mod sampling;
pub mod space_information;
pub mod validity;

// Re-export common types for convenience
pub use common::{PlanningError, PlanningResult};
pub use manifold::{RealVectorBounds, RealVectorStateManifold, State, StateManifold};
pub use sampling::{
    ManifoldStateSampler, PooledSampler, SamplerKind, StateSamplerArray, UniformValidStateSampler,
    ValidStateSampler,
};
pub use space_information::{
    ManifoldStateSamplerAllocator, SpaceInformation, ValidStateSamplerAllocator,
};
pub use validity::{
    AllValidStateValidityChecker, DiscreteMotionValidator, FnStateValidityChecker, MotionValidator,
    StateValidityChecker,
};
