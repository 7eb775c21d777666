//! State validity checking
//!
//! The core does not decide what makes a configuration valid; it calls
//! an externally supplied oracle. The only concrete checker provided
//! here is the trivial always-valid default installed by
//! [`SpaceInformation::setup`](crate::space_information::SpaceInformation::setup).

pub mod motion_validator;

pub use motion_validator::{DiscreteMotionValidator, MotionValidator};

use crate::manifold::State;

/// Oracle deciding whether a single state is admissible
pub trait StateValidityChecker: Send + Sync {
    fn is_valid(&self, state: &State) -> bool;
}

/// Checker accepting every state. Installed as the default when no
/// checker is set, in which case no collision checking is performed.
pub struct AllValidStateValidityChecker;

impl StateValidityChecker for AllValidStateValidityChecker {
    fn is_valid(&self, _state: &State) -> bool {
        true
    }
}

/// Checker backed by a plain function or closure
pub struct FnStateValidityChecker {
    func: Box<dyn Fn(&State) -> bool + Send + Sync>,
}

impl FnStateValidityChecker {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&State) -> bool + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
        }
    }
}

impl StateValidityChecker for FnStateValidityChecker {
    fn is_valid(&self, state: &State) -> bool {
        (self.func)(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_valid_checker() {
        let checker = AllValidStateValidityChecker;
        assert!(checker.is_valid(&State::from_values(vec![1.0, 2.0])));
    }

    #[test]
    fn test_fn_checker() {
        let checker = FnStateValidityChecker::new(|state| state[0] > 0.0);
        assert!(checker.is_valid(&State::from_values(vec![1.0])));
        assert!(!checker.is_valid(&State::from_values(vec![-1.0])));
    }
}
