//! Samplers producing states accepted by the validity oracle

use std::sync::Arc;

use crate::manifold::State;
use crate::sampling::ManifoldStateSampler;
use crate::space_information::SpaceInformation;

/// Default number of rejection attempts before a sample call gives up
pub const DEFAULT_NR_ATTEMPTS: u32 = 10;

/// Sampler producing only states accepted by the validity oracle.
///
/// Sampling may fail: each call retries an underlying distribution up to
/// the attempt budget and reports whether a valid state was found.
pub trait ValidStateSampler: Send {
    /// Name of the sampling strategy, for diagnostics
    fn name(&self) -> &str;

    /// Sample a valid state. Returns false if no valid state was found
    /// within the attempt budget; `state` holds the last attempt.
    fn sample(&mut self, state: &mut State) -> bool;

    /// Sample a valid state within `distance` of `near`
    fn sample_near(&mut self, state: &mut State, near: &State, distance: f64) -> bool;

    /// Current attempt budget
    fn nr_attempts(&self) -> u32;

    /// Set the attempt budget
    fn set_nr_attempts(&mut self, attempts: u32);
}

/// Valid state sampler using uniform rejection sampling
pub struct UniformValidStateSampler {
    si: Arc<SpaceInformation>,
    sampler: Box<dyn ManifoldStateSampler>,
    attempts: u32,
}

impl UniformValidStateSampler {
    pub fn new(si: &Arc<SpaceInformation>) -> Self {
        Self {
            sampler: si.alloc_manifold_state_sampler(),
            si: Arc::clone(si),
            attempts: DEFAULT_NR_ATTEMPTS,
        }
    }
}

impl ValidStateSampler for UniformValidStateSampler {
    fn name(&self) -> &str {
        "uniform"
    }

    fn sample(&mut self, state: &mut State) -> bool {
        for _ in 0..self.attempts {
            self.sampler.sample_uniform(state);
            if self.si.is_valid(state) {
                return true;
            }
        }
        false
    }

    fn sample_near(&mut self, state: &mut State, near: &State, distance: f64) -> bool {
        for _ in 0..self.attempts {
            self.sampler.sample_uniform_near(state, near, distance);
            if self.si.is_valid(state) {
                return true;
            }
        }
        false
    }

    fn nr_attempts(&self) -> u32 {
        self.attempts
    }

    fn set_nr_attempts(&mut self, attempts: u32) {
        self.attempts = attempts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifold::RealVectorStateManifold;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingChecker {
        calls: AtomicUsize,
        valid: bool,
    }

    impl crate::validity::StateValidityChecker for CountingChecker {
        fn is_valid(&self, _state: &State) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.valid
        }
    }

    fn space_with_checker(checker: Arc<CountingChecker>) -> Arc<SpaceInformation> {
        let manifold = Arc::new(RealVectorStateManifold::with_bounds(2, -1.0, 1.0));
        let mut si = SpaceInformation::new(manifold);
        si.set_state_validity_checker(checker);
        si.setup().unwrap();
        Arc::new(si)
    }

    #[test]
    fn test_sample_succeeds_on_first_valid() {
        let checker = Arc::new(CountingChecker {
            calls: AtomicUsize::new(0),
            valid: true,
        });
        let si = space_with_checker(checker.clone());
        let mut sampler = UniformValidStateSampler::new(&si);
        let mut state = si.alloc_state();

        assert!(sampler.sample(&mut state));
        assert!(si.satisfies_bounds(&state));
        assert_eq!(checker.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sample_exhausts_attempt_budget() {
        let checker = Arc::new(CountingChecker {
            calls: AtomicUsize::new(0),
            valid: false,
        });
        let si = space_with_checker(checker.clone());
        let mut sampler = UniformValidStateSampler::new(&si);
        sampler.set_nr_attempts(3);
        let mut state = si.alloc_state();

        assert!(!sampler.sample(&mut state));
        assert_eq!(checker.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_sample_near_stays_in_bounds() {
        let checker = Arc::new(CountingChecker {
            calls: AtomicUsize::new(0),
            valid: true,
        });
        let si = space_with_checker(checker);
        let mut sampler = UniformValidStateSampler::new(&si);
        let near = State::from_values(vec![1.0, 1.0]);
        let mut state = si.alloc_state();

        assert!(sampler.sample_near(&mut state, &near, 10.0));
        assert!(si.satisfies_bounds(&state));
    }

    #[test]
    fn test_default_attempt_budget() {
        let checker = Arc::new(CountingChecker {
            calls: AtomicUsize::new(0),
            valid: true,
        });
        let si = space_with_checker(checker);
        let sampler = UniformValidStateSampler::new(&si);
        assert_eq!(sampler.nr_attempts(), DEFAULT_NR_ATTEMPTS);
    }
}
