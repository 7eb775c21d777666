//! Space information: the binding of a state manifold with validity
//! checking, motion validation and sampler allocation
//!
//! Planners talk to [`SpaceInformation`] for everything: allocating and
//! comparing states, measuring and interpolating, sampling, and deciding
//! whether a continuous motion between two states is admissible.

use log::warn;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::common::{PlanningError, PlanningResult};
use crate::manifold::{State, StateManifold};
use crate::sampling::{ManifoldStateSampler, UniformValidStateSampler, ValidStateSampler};
use crate::validity::{
    AllValidStateValidityChecker, DiscreteMotionValidator, FnStateValidityChecker, MotionValidator,
    StateValidityChecker,
};

/// Factory override for valid state samplers
pub type ValidStateSamplerAllocator =
    Box<dyn Fn(&Arc<SpaceInformation>) -> Box<dyn ValidStateSampler> + Send + Sync>;

/// Factory override for manifold state samplers
pub type ManifoldStateSamplerAllocator =
    Box<dyn Fn(&Arc<dyn StateManifold>) -> Box<dyn ManifoldStateSampler> + Send + Sync>;

/// Default fraction of the maximum extent at which motions are
/// discretized for validity checking
const DEFAULT_VALIDITY_CHECKING_RESOLUTION: f64 = 0.01;

/// Binds a state manifold with a validity checker and a motion
/// validator, and exposes the motion discretization and checking
/// operations planners are built on.
///
/// After [`setup`](SpaceInformation::setup) the instance is read-only
/// and may be shared across worker threads (as `Arc<SpaceInformation>`),
/// provided the supplied validity checker is reentrant.
pub struct SpaceInformation {
    manifold: Arc<dyn StateManifold>,
    validity_checker: Option<Arc<dyn StateValidityChecker>>,
    motion_validator: Option<Arc<dyn MotionValidator>>,
    valid_sampler_allocator: Option<ValidStateSamplerAllocator>,
    manifold_sampler_allocator: Option<ManifoldStateSamplerAllocator>,
    resolution: f64,
    setup: bool,
}

impl SpaceInformation {
    pub fn new(manifold: Arc<dyn StateManifold>) -> Self {
        Self {
            manifold,
            validity_checker: None,
            motion_validator: Some(Arc::new(DiscreteMotionValidator::new())),
            valid_sampler_allocator: None,
            manifold_sampler_allocator: None,
            resolution: DEFAULT_VALIDITY_CHECKING_RESOLUTION,
            setup: false,
        }
    }

    /// Finish configuring the space: install the default validity
    /// checker and motion validator where none were set and validate the
    /// manifold. Must run before any validity or motion operation.
    pub fn setup(&mut self) -> PlanningResult<()> {
        if self.validity_checker.is_none() {
            self.validity_checker = Some(Arc::new(AllValidStateValidityChecker));
            warn!("State validity checker not set! No collision checking is performed");
        }

        if self.motion_validator.is_none() {
            self.motion_validator = Some(Arc::new(DiscreteMotionValidator::new()));
        }

        self.manifold.setup()?;
        if self.manifold.dimension() == 0 {
            return Err(PlanningError::Configuration(
                "The dimension of the state manifold we plan in must be > 0".to_string(),
            ));
        }

        self.setup = true;
        Ok(())
    }

    pub fn is_setup(&self) -> bool {
        self.setup
    }

    pub fn manifold(&self) -> &Arc<dyn StateManifold> {
        &self.manifold
    }

    pub fn set_state_validity_checker(&mut self, checker: Arc<dyn StateValidityChecker>) {
        self.validity_checker = Some(checker);
    }

    /// Install a validity checker backed by a plain function or closure
    pub fn set_state_validity_fn<F>(&mut self, func: F)
    where
        F: Fn(&State) -> bool + Send + Sync + 'static,
    {
        self.validity_checker = Some(Arc::new(FnStateValidityChecker::new(func)));
    }

    pub fn set_motion_validator(&mut self, validator: Arc<dyn MotionValidator>) {
        self.motion_validator = Some(validator);
    }

    /// Install a factory used by
    /// [`alloc_valid_state_sampler`](SpaceInformation::alloc_valid_state_sampler)
    /// instead of the default uniform rejection sampler
    pub fn set_valid_state_sampler_allocator(&mut self, allocator: ValidStateSamplerAllocator) {
        self.valid_sampler_allocator = Some(allocator);
    }

    /// Install a factory used by
    /// [`alloc_manifold_state_sampler`](SpaceInformation::alloc_manifold_state_sampler)
    /// instead of the manifold's own sampler
    pub fn set_manifold_state_sampler_allocator(
        &mut self,
        allocator: ManifoldStateSamplerAllocator,
    ) {
        self.manifold_sampler_allocator = Some(allocator);
    }

    /// Fraction of the maximum extent at which motions are discretized
    pub fn state_validity_checking_resolution(&self) -> f64 {
        self.resolution
    }

    pub fn set_state_validity_checking_resolution(&mut self, resolution: f64) -> PlanningResult<()> {
        if resolution <= 0.0 || resolution > 1.0 {
            return Err(PlanningError::InvalidParameter(format!(
                "State validity checking resolution must be in (0, 1]; got {}",
                resolution
            )));
        }
        self.resolution = resolution;
        Ok(())
    }

    // manifold delegations

    pub fn dimension(&self) -> usize {
        self.manifold.dimension()
    }

    pub fn maximum_extent(&self) -> f64 {
        self.manifold.maximum_extent()
    }

    pub fn distance(&self, state1: &State, state2: &State) -> f64 {
        self.manifold.distance(state1, state2)
    }

    pub fn equal_states(&self, state1: &State, state2: &State) -> bool {
        self.manifold.equal_states(state1, state2)
    }

    pub fn interpolate(&self, from: &State, to: &State, t: f64, out: &mut State) {
        self.manifold.interpolate(from, to, t, out);
    }

    pub fn copy_state(&self, destination: &mut State, source: &State) {
        self.manifold.copy_state(destination, source);
    }

    pub fn enforce_bounds(&self, state: &mut State) {
        self.manifold.enforce_bounds(state);
    }

    pub fn satisfies_bounds(&self, state: &State) -> bool {
        self.manifold.satisfies_bounds(state)
    }

    pub fn alloc_state(&self) -> State {
        self.manifold.alloc_state()
    }

    /// Check one state against the validity oracle.
    ///
    /// Precondition: a validity checker is installed, either explicitly
    /// or by [`setup`](SpaceInformation::setup).
    pub fn is_valid(&self, state: &State) -> bool {
        self.validity_checker
            .as_ref()
            .expect("state validity checker not set; call setup() first")
            .is_valid(state)
    }

    /// Check the continuous motion between two states through the
    /// installed motion validator.
    pub fn check_motion(&self, s1: &State, s2: &State) -> bool {
        self.motion_validator
            .as_ref()
            .expect("motion validator not set; call setup() first")
            .check_motion(self, s1, s2)
    }

    /// Deterministic left-to-right scan over a discretized motion.
    /// Returns the index of the first invalid state, or `None` if the
    /// first `count` states are all valid. Used when the caller needs
    /// the exact boundary of free space along the path.
    ///
    /// Precondition: `states.len() >= count`.
    pub fn first_invalid_state(&self, states: &[State], count: usize) -> Option<usize> {
        debug_assert!(states.len() >= count);
        states.iter().take(count).position(|s| !self.is_valid(s))
    }

    /// Adaptive scan over a discretized motion, optimized for early
    /// rejection: endpoints are checked first, then the states in
    /// breadth-first bisection order, so a mid-path obstruction is found
    /// without waiting for a linear scan to reach it. Every state is
    /// checked exactly once when the motion is valid. The traversal uses
    /// an explicit queue so stack depth stays bounded for arbitrarily
    /// long discretizations.
    ///
    /// Precondition: `states.len() >= count`.
    pub fn check_motion_states(&self, states: &[State], count: usize) -> bool {
        debug_assert!(states.len() >= count);
        if count == 0 {
            return true;
        }
        if count == 1 {
            return self.is_valid(&states[0]);
        }

        if !self.is_valid(&states[0]) {
            return false;
        }
        if !self.is_valid(&states[count - 1]) {
            return false;
        }

        // both endpoints are valid; bisect the interior
        if count > 2 {
            let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
            queue.push_back((0, count - 1));

            while let Some((low, high)) = queue.pop_front() {
                let mid = (low + high) / 2;
                if !self.is_valid(&states[mid]) {
                    return false;
                }
                if low + 1 < mid {
                    queue.push_back((low, mid));
                }
                if high > mid + 1 {
                    queue.push_back((mid, high));
                }
            }
        }
        true
    }

    /// Produce up to `count` evenly spaced states strictly between `s1`
    /// and `s2`, plus the two endpoints when `endpoints` is set. With
    /// `alloc` the output vector is resized and filled with fresh
    /// states; without it, states are written into the caller's
    /// pre-sized buffer, which is never grown. Returns the number of
    /// states written.
    pub fn get_motion_states(
        &self,
        s1: &State,
        s2: &State,
        states: &mut Vec<State>,
        count: usize,
        endpoints: bool,
        alloc: bool,
    ) -> usize {
        // the interior states plus one give the number of segments
        // the motion is split into
        let segments = count + 1;

        if segments < 2 {
            let mut added = 0;

            // if endpoints are requested, at most the endpoints are produced
            if endpoints {
                if alloc {
                    states.clear();
                    states.push(self.alloc_state());
                    states.push(self.alloc_state());
                }
                if !states.is_empty() {
                    self.copy_state(&mut states[0], s1);
                    added += 1;
                }
                if states.len() > 1 {
                    self.copy_state(&mut states[1], s2);
                    added += 1;
                }
            } else if alloc {
                states.clear();
            }
            return added;
        }

        if alloc {
            let needed = if endpoints { segments + 1 } else { segments - 1 };
            states.clear();
            states.resize_with(needed, || self.alloc_state());
        }

        let mut added = 0;

        if endpoints && !states.is_empty() {
            self.copy_state(&mut states[0], s1);
            added += 1;
        }

        // the states in between
        for j in 1..segments {
            if added >= states.len() {
                break;
            }
            let t = j as f64 / segments as f64;
            self.interpolate(s1, s2, t, &mut states[added]);
            added += 1;
        }

        if endpoints && added < states.len() {
            self.copy_state(&mut states[added], s2);
            added += 1;
        }

        added
    }

    /// Try to find a valid state close to `near`: copy it into `state`,
    /// repair any bound violation, and if the result is invalid, perturb
    /// it with uniform-near sampling around the original (repaired)
    /// anchor, up to `attempts` tries. Returns whether a valid state was
    /// found; `state` retains the last attempt regardless of outcome.
    pub fn search_valid_nearby(
        &self,
        state: &mut State,
        near: &State,
        distance: f64,
        attempts: u32,
    ) -> bool {
        self.copy_state(state, near);

        // fix bounds, if needed
        if !self.satisfies_bounds(state) {
            self.enforce_bounds(state);
        }

        let mut result = self.is_valid(state);

        if !result {
            // keep perturbing around the same anchor
            let mut sampler = self.alloc_manifold_state_sampler();
            let anchor = state.clone();
            for _ in 0..attempts {
                sampler.sample_uniform_near(state, &anchor, distance);
                result = self.is_valid(state);
                if result {
                    break;
                }
            }
        }

        result
    }

    /// Allocate a distribution sampler, honoring the installed factory
    /// override if any.
    pub fn alloc_manifold_state_sampler(&self) -> Box<dyn ManifoldStateSampler> {
        match &self.manifold_sampler_allocator {
            Some(allocator) => allocator(&self.manifold),
            None => Arc::clone(&self.manifold).alloc_state_sampler(),
        }
    }

    /// Allocate a valid state sampler: the installed factory override if
    /// any, uniform rejection sampling otherwise.
    pub fn alloc_valid_state_sampler(self: Arc<Self>) -> Box<dyn ValidStateSampler> {
        match &self.valid_sampler_allocator {
            Some(allocator) => allocator(&self),
            None => Box::new(UniformValidStateSampler::new(&self)),
        }
    }
}

impl fmt::Display for SpaceInformation {
    /// Human-readable settings report. Diagnostic text only; the format
    /// is not a stable contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "State space settings:")?;
        writeln!(f, "  - dimension: {}", self.manifold.dimension())?;
        writeln!(f, "  - extent: {}", self.manifold.maximum_extent())?;
        writeln!(
            f,
            "  - state validity check resolution: {}%",
            self.resolution * 100.0
        )?;
        writeln!(f, "  - state manifold:")?;
        write!(f, "{}", self.manifold.settings())
    }
}
