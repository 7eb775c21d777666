//! Growable pool of per-worker samplers
//!
//! Multi-threaded planners give each worker its own sampler so that no
//! random generator state is shared across threads. The pool allocates
//! either sampler family through the owning space, selected by
//! [`SamplerKind`].

use std::ops::{Index, IndexMut};
use std::sync::Arc;

use crate::manifold::State;
use crate::sampling::{ManifoldStateSampler, ValidStateSampler};
use crate::space_information::SpaceInformation;

/// The kind of sampler a pool allocates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerKind {
    /// Distribution sampler allocated from the manifold, no validity guarantee
    Manifold,
    /// Rejection sampler allocated from the space, guaranteeing validity
    Valid,
}

/// A pool slot holding one sampler of either family
pub enum PooledSampler {
    Manifold(Box<dyn ManifoldStateSampler>),
    Valid(Box<dyn ValidStateSampler>),
}

impl PooledSampler {
    /// Draw one state through the slot's sampler. Manifold samplers
    /// always succeed; valid samplers report whether a valid state was
    /// found within their attempt budget.
    pub fn sample(&mut self, state: &mut State) -> bool {
        match self {
            PooledSampler::Manifold(sampler) => {
                sampler.sample_uniform(state);
                true
            }
            PooledSampler::Valid(sampler) => sampler.sample(state),
        }
    }

    pub fn as_manifold_mut(&mut self) -> Option<&mut dyn ManifoldStateSampler> {
        match self {
            PooledSampler::Manifold(sampler) => Some(sampler.as_mut()),
            PooledSampler::Valid(_) => None,
        }
    }

    pub fn as_valid_mut(&mut self) -> Option<&mut dyn ValidStateSampler> {
        match self {
            PooledSampler::Manifold(_) => None,
            PooledSampler::Valid(sampler) => Some(sampler.as_mut()),
        }
    }
}

/// Growable collection of samplers, one slot per planner worker.
///
/// Slot `i` is exclusively associated with worker `i`; keeping the index
/// in range is the caller's obligation and is not checked here.
pub struct StateSamplerArray {
    si: Arc<SpaceInformation>,
    kind: SamplerKind,
    samplers: Vec<PooledSampler>,
}

impl StateSamplerArray {
    pub fn new(si: &Arc<SpaceInformation>, kind: SamplerKind) -> Self {
        Self {
            si: Arc::clone(si),
            kind,
            samplers: Vec::new(),
        }
    }

    pub fn kind(&self) -> SamplerKind {
        self.kind
    }

    /// Create or release samplers so the pool holds `count` slots.
    /// Shrinking drops trailing slots; growing allocates only the new
    /// trailing slots, leaving existing samplers and their accumulated
    /// random state untouched.
    pub fn resize(&mut self, count: usize) {
        if self.samplers.len() > count {
            self.samplers.truncate(count);
        } else {
            while self.samplers.len() < count {
                let slot = match self.kind {
                    SamplerKind::Manifold => {
                        PooledSampler::Manifold(self.si.alloc_manifold_state_sampler())
                    }
                    SamplerKind::Valid => {
                        PooledSampler::Valid(Arc::clone(&self.si).alloc_valid_state_sampler())
                    }
                };
                self.samplers.push(slot);
            }
        }
    }

    /// Number of samplers currently held
    pub fn len(&self) -> usize {
        self.samplers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samplers.is_empty()
    }
}

impl Index<usize> for StateSamplerArray {
    type Output = PooledSampler;

    /// Access a specific sampler. The index is not range-checked.
    fn index(&self, index: usize) -> &PooledSampler {
        &self.samplers[index]
    }
}

impl IndexMut<usize> for StateSamplerArray {
    fn index_mut(&mut self, index: usize) -> &mut PooledSampler {
        &mut self.samplers[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifold::RealVectorStateManifold;
    use crate::sampling::DEFAULT_NR_ATTEMPTS;

    fn setup_space() -> Arc<SpaceInformation> {
        let manifold = Arc::new(RealVectorStateManifold::with_bounds(2, -5.0, 5.0));
        let mut si = SpaceInformation::new(manifold);
        si.set_state_validity_fn(|_| true);
        si.setup().unwrap();
        Arc::new(si)
    }

    #[test]
    fn test_resize_grow_preserves_existing_slots() {
        let si = setup_space();
        let mut pool = StateSamplerArray::new(&si, SamplerKind::Valid);
        pool.resize(2);
        assert_eq!(pool.len(), 2);

        // mark slot 0 so we can tell it apart from a fresh allocation
        pool[0].as_valid_mut().unwrap().set_nr_attempts(42);

        pool.resize(5);
        assert_eq!(pool.len(), 5);
        assert_eq!(pool[0].as_valid_mut().unwrap().nr_attempts(), 42);
        assert_eq!(
            pool[4].as_valid_mut().unwrap().nr_attempts(),
            DEFAULT_NR_ATTEMPTS
        );
    }

    #[test]
    fn test_resize_shrink_releases_trailing_slots() {
        let si = setup_space();
        let mut pool = StateSamplerArray::new(&si, SamplerKind::Valid);
        pool.resize(5);
        pool[1].as_valid_mut().unwrap().set_nr_attempts(7);

        pool.resize(2);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[1].as_valid_mut().unwrap().nr_attempts(), 7);
    }

    #[test]
    fn test_manifold_pool_samples_in_bounds() {
        let si = setup_space();
        let mut pool = StateSamplerArray::new(&si, SamplerKind::Manifold);
        pool.resize(3);
        assert_eq!(pool.kind(), SamplerKind::Manifold);

        let mut state = si.alloc_state();
        for i in 0..pool.len() {
            assert!(pool[i].sample(&mut state));
            assert!(si.satisfies_bounds(&state));
        }
    }

    #[test]
    fn test_slot_accessors_match_kind() {
        let si = setup_space();
        let mut pool = StateSamplerArray::new(&si, SamplerKind::Manifold);
        pool.resize(1);
        assert!(pool[0].as_manifold_mut().is_some());
        assert!(pool[0].as_valid_mut().is_none());
    }
}
