//! Motion validation by segment discretization

use crate::manifold::State;
use crate::space_information::SpaceInformation;

/// Oracle deciding whether an entire continuous segment between two
/// states is admissible.
///
/// The space is passed per call rather than stored, so implementations
/// hold no back-reference to their owner.
pub trait MotionValidator: Send + Sync {
    fn check_motion(&self, si: &SpaceInformation, s1: &State, s2: &State) -> bool;
}

/// Default motion validator: discretizes the segment at the space's
/// validity-checking resolution and checks the resulting states with the
/// adaptive bisection scan.
#[derive(Debug, Default)]
pub struct DiscreteMotionValidator;

impl DiscreteMotionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Number of segments the motion between `s1` and `s2` is split into
    fn segment_count(&self, si: &SpaceInformation, s1: &State, s2: &State) -> usize {
        let step = si.state_validity_checking_resolution() * si.maximum_extent();
        if step > 0.0 {
            (si.distance(s1, s2) / step).ceil() as usize
        } else {
            1
        }
    }
}

impl MotionValidator for DiscreteMotionValidator {
    fn check_motion(&self, si: &SpaceInformation, s1: &State, s2: &State) -> bool {
        let segments = self.segment_count(si, s1, s2);
        let interior = segments.saturating_sub(1);

        let mut states = Vec::new();
        let count = si.get_motion_states(s1, s2, &mut states, interior, true, true);
        si.check_motion_states(&states, count)
    }
}
